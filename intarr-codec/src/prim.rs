use crate::error::{Error, Result};
use intarr_datatype::error::Error as DataTypeError;
use intarr_datatype::{ElemType, ElemValue, Typed};

/// Primitive array of arbitrary primitive element type.
///
/// This is the closed set of unboxed arrays an integer array can be
/// converted to and from. Allocation, element read and element write
/// all dispatch on element type.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimArray {
    Bool(Box<[bool]>),
    I8(Box<[i8]>),
    I16(Box<[i16]>),
    I32(Box<[i32]>),
    I64(Box<[i64]>),
    F32(Box<[f32]>),
    F64(Box<[f64]>),
}

macro_rules! dispatch {
    ($arr:expr, $v:ident => $body:expr) => {
        match $arr {
            PrimArray::Bool($v) => $body,
            PrimArray::I8($v) => $body,
            PrimArray::I16($v) => $body,
            PrimArray::I32($v) => $body,
            PrimArray::I64($v) => $body,
            PrimArray::F32($v) => $body,
            PrimArray::F64($v) => $body,
        }
    };
}

impl PrimArray {
    /// Allocate array of given element type and length, filled with
    /// default values.
    /// Returns None if the type has no primitive array.
    #[inline]
    pub fn with_len(ty: ElemType, len: usize) -> Option<Self> {
        let res = match ty {
            ElemType::Bool => PrimArray::Bool(vec![false; len].into_boxed_slice()),
            ElemType::I8 => PrimArray::I8(vec![0; len].into_boxed_slice()),
            ElemType::I16 => PrimArray::I16(vec![0; len].into_boxed_slice()),
            ElemType::I32 => PrimArray::I32(vec![0; len].into_boxed_slice()),
            ElemType::I64 => PrimArray::I64(vec![0; len].into_boxed_slice()),
            ElemType::F32 => PrimArray::F32(vec![0.0; len].into_boxed_slice()),
            ElemType::F64 => PrimArray::F64(vec![0.0; len].into_boxed_slice()),
            ElemType::I128 | ElemType::String | ElemType::Null => return None,
        };
        Some(res)
    }

    #[inline]
    pub fn len(&self) -> usize {
        dispatch!(self, v => v.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns element at given index as boxed value.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<ElemValue> {
        match self {
            PrimArray::Bool(v) => v.get(idx).map(|e| ElemValue::Bool(*e)),
            PrimArray::I8(v) => v.get(idx).map(|e| ElemValue::I8(*e)),
            PrimArray::I16(v) => v.get(idx).map(|e| ElemValue::I16(*e)),
            PrimArray::I32(v) => v.get(idx).map(|e| ElemValue::I32(*e)),
            PrimArray::I64(v) => v.get(idx).map(|e| ElemValue::I64(*e)),
            PrimArray::F32(v) => v.get(idx).map(|e| ElemValue::F32(*e)),
            PrimArray::F64(v) => v.get(idx).map(|e| ElemValue::F64(*e)),
        }
    }

    /// Set element at given index.
    /// The value must have exactly the element type of this array.
    pub fn set(&mut self, idx: usize, value: ElemValue) -> Result<()> {
        let len = self.len();
        if idx >= len {
            return Err(Error::IndexOutOfBound(idx));
        }
        match (self, value) {
            (PrimArray::Bool(v), ElemValue::Bool(e)) => v[idx] = e,
            (PrimArray::I8(v), ElemValue::I8(e)) => v[idx] = e,
            (PrimArray::I16(v), ElemValue::I16(e)) => v[idx] = e,
            (PrimArray::I32(v), ElemValue::I32(e)) => v[idx] = e,
            (PrimArray::I64(v), ElemValue::I64(e)) => v[idx] = e,
            (PrimArray::F32(v), ElemValue::F32(e)) => v[idx] = e,
            (PrimArray::F64(v), ElemValue::F64(e)) => v[idx] = e,
            (arr, value) => {
                return Err(Error::DataType(DataTypeError::UnsupportedConversion {
                    from: value.elem_ty(),
                    to: arr.elem_ty(),
                }))
            }
        }
        Ok(())
    }

    /// Iterate all elements as boxed values.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = ElemValue> + '_ {
        // index is always in bound
        (0..self.len()).map(move |i| self.get(i).unwrap_or_default())
    }
}

impl Typed for PrimArray {
    #[inline]
    fn elem_ty(&self) -> ElemType {
        match self {
            PrimArray::Bool(_) => ElemType::Bool,
            PrimArray::I8(_) => ElemType::I8,
            PrimArray::I16(_) => ElemType::I16,
            PrimArray::I32(_) => ElemType::I32,
            PrimArray::I64(_) => ElemType::I64,
            PrimArray::F32(_) => ElemType::F32,
            PrimArray::F64(_) => ElemType::F64,
        }
    }
}

macro_rules! impl_from_vec {
    ($ty:ty, $variant:ident) => {
        impl From<Vec<$ty>> for PrimArray {
            #[inline]
            fn from(src: Vec<$ty>) -> Self {
                PrimArray::$variant(src.into_boxed_slice())
            }
        }
    };
}

impl_from_vec!(bool, Bool);
impl_from_vec!(i8, I8);
impl_from_vec!(i16, I16);
impl_from_vec!(i32, I32);
impl_from_vec!(i64, I64);
impl_from_vec!(f32, F32);
impl_from_vec!(f64, F64);
