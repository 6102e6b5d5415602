use crate::{ElemType, Typed};
use std::fmt;
use std::sync::Arc;

/// Boxed element value.
///
/// This is the object form of a single array element: the shape
/// elements take in object arrays, in collections and as scalar
/// parameters. Unlike the primitive forms it can be null.
#[derive(Debug, Clone, PartialEq)]
pub enum ElemValue {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    F32(f32),
    F64(f64),
    String(Arc<str>),
}

impl Default for ElemValue {
    fn default() -> Self {
        ElemValue::Null
    }
}

impl Typed for ElemValue {
    #[inline]
    fn elem_ty(&self) -> ElemType {
        match self {
            ElemValue::Null => ElemType::Null,
            ElemValue::Bool(_) => ElemType::Bool,
            ElemValue::I8(_) => ElemType::I8,
            ElemValue::I16(_) => ElemType::I16,
            ElemValue::I32(_) => ElemType::I32,
            ElemValue::I64(_) => ElemType::I64,
            ElemValue::I128(_) => ElemType::I128,
            ElemValue::F32(_) => ElemType::F32,
            ElemValue::F64(_) => ElemType::F64,
            ElemValue::String(_) => ElemType::String,
        }
    }
}

impl ElemValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ElemValue::Null)
    }

    /// Returns the value as i128 if it is an integer.
    #[inline]
    pub fn as_i128(&self) -> Option<i128> {
        let res = match self {
            ElemValue::I8(v) => *v as i128,
            ElemValue::I16(v) => *v as i128,
            ElemValue::I32(v) => *v as i128,
            ElemValue::I64(v) => *v as i128,
            ElemValue::I128(v) => *v,
            _ => return None,
        };
        Some(res)
    }

    /// Returns the value as f64 if it is a float.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ElemValue::F32(v) => Some(*v as f64),
            ElemValue::F64(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ElemValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ElemValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElemValue::Null => f.write_str("null"),
            ElemValue::Bool(v) => write!(f, "{}", v),
            ElemValue::I8(v) => write!(f, "{}", v),
            ElemValue::I16(v) => write!(f, "{}", v),
            ElemValue::I32(v) => write!(f, "{}", v),
            ElemValue::I64(v) => write!(f, "{}", v),
            ElemValue::I128(v) => write!(f, "{}", v),
            ElemValue::F32(v) => write!(f, "{}", v),
            ElemValue::F64(v) => write!(f, "{}", v),
            ElemValue::String(v) => write!(f, "{:?}", v),
        }
    }
}

macro_rules! impl_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for ElemValue {
            #[inline]
            fn from(value: $ty) -> Self {
                ElemValue::$variant(value)
            }
        }
    };
}

impl_from!(bool, Bool);
impl_from!(i8, I8);
impl_from!(i16, I16);
impl_from!(i32, I32);
impl_from!(i64, I64);
impl_from!(i128, I128);
impl_from!(f32, F32);
impl_from!(f64, F64);
impl_from!(Arc<str>, String);

impl From<&str> for ElemValue {
    #[inline]
    fn from(value: &str) -> Self {
        ElemValue::String(Arc::from(value))
    }
}

impl From<String> for ElemValue {
    #[inline]
    fn from(value: String) -> Self {
        ElemValue::String(Arc::from(value))
    }
}

impl<T: Into<ElemValue>> From<Option<T>> for ElemValue {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ElemValue::Null)
    }
}
