use crate::error::{Error, Result};
use crate::{ElemType, ElemValue, Typed};

/// Element descriptor converts single native elements from and to
/// their boxed form of arbitrary element type.
///
/// Array codecs delegate every per-element conversion to it, so the
/// rules living here decide which widening and narrowing an array
/// conversion accepts.
pub trait ElemDescriptor {
    type Native: Copy;

    /// Returns the element type of native values.
    fn elem_ty(&self) -> ElemType;

    /// Convert a boxed value of any type into native element.
    fn wrap(&self, value: &ElemValue) -> Result<Self::Native>;

    /// Convert a native element into boxed value of given type.
    fn unwrap(&self, value: Self::Native, ty: ElemType) -> Result<ElemValue>;
}

/// Descriptor of 32-bit signed integer element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I32Descriptor;

impl ElemDescriptor for I32Descriptor {
    type Native = i32;

    #[inline]
    fn elem_ty(&self) -> ElemType {
        ElemType::I32
    }

    #[inline]
    fn wrap(&self, value: &ElemValue) -> Result<i32> {
        match value {
            ElemValue::Null => Err(Error::NullElement),
            ElemValue::I32(v) => Ok(*v),
            ElemValue::I8(v) => Ok(*v as i32),
            ElemValue::I16(v) => Ok(*v as i32),
            ElemValue::I64(_) | ElemValue::I128(_) => {
                // as_i128 always succeeds on integers
                let v = value.as_i128().unwrap_or_default();
                i32::try_from(v).map_err(|_| out_of_range(value, ElemType::I32))
            }
            ElemValue::F32(_) | ElemValue::F64(_) => {
                let v = value.as_f64().unwrap_or(f64::NAN);
                f64_to_i32(v).ok_or_else(|| out_of_range(value, ElemType::I32))
            }
            ElemValue::String(s) => s
                .parse::<i32>()
                .map_err(|_| Error::InvalidNumber(s.to_string())),
            ElemValue::Bool(_) => Err(Error::UnsupportedConversion {
                from: value.elem_ty(),
                to: ElemType::I32,
            }),
        }
    }

    #[inline]
    fn unwrap(&self, value: i32, ty: ElemType) -> Result<ElemValue> {
        let res = match ty {
            ElemType::I32 => ElemValue::I32(value),
            ElemType::I8 => i8::try_from(value)
                .map(ElemValue::I8)
                .map_err(|_| out_of_range(&ElemValue::I32(value), ty))?,
            ElemType::I16 => i16::try_from(value)
                .map(ElemValue::I16)
                .map_err(|_| out_of_range(&ElemValue::I32(value), ty))?,
            ElemType::I64 => ElemValue::I64(value as i64),
            ElemType::I128 => ElemValue::I128(value as i128),
            // widening to f32 may round, same as numeric cast.
            ElemType::F32 => ElemValue::F32(value as f32),
            ElemType::F64 => ElemValue::F64(value as f64),
            ElemType::String => ElemValue::from(value.to_string()),
            ElemType::Bool | ElemType::Null => {
                return Err(Error::UnsupportedConversion {
                    from: ElemType::I32,
                    to: ty,
                })
            }
        };
        Ok(res)
    }
}

/// Float converts to integer only if it is integral and in range.
#[inline]
fn f64_to_i32(v: f64) -> Option<i32> {
    if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 {
        Some(v as i32)
    } else {
        None
    }
}

#[inline]
fn out_of_range(value: &ElemValue, ty: ElemType) -> Error {
    Error::OutOfRange {
        value: value.to_string(),
        ty,
    }
}
