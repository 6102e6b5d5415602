pub mod desc;
pub mod error;
pub mod value;

pub use desc::*;
pub use value::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element type of an array or of a single boxed value.
///
/// The set is closed: every conversion rule in this crate and every
/// array shape built on top of it dispatches on this tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElemType {
    /// Only the null value has null type.
    Null,
    Bool,
    I8,
    I16,
    I32,
    I64,
    /// Widest integer, used where an unbounded integer is requested.
    I128,
    F32,
    F64,
    String,
}

impl ElemType {
    #[inline]
    pub fn to_lower(&self) -> &'static str {
        match self {
            ElemType::Null => "null",
            ElemType::Bool => "bool",
            ElemType::I8 => "i8",
            ElemType::I16 => "i16",
            ElemType::I32 => "i32",
            ElemType::I64 => "i64",
            ElemType::I128 => "i128",
            ElemType::F32 => "f32",
            ElemType::F64 => "f64",
            ElemType::String => "string",
        }
    }

    /// Returns whether values of this type can be stored unboxed
    /// in a primitive array.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            ElemType::Bool
                | ElemType::I8
                | ElemType::I16
                | ElemType::I32
                | ElemType::I64
                | ElemType::F32
                | ElemType::F64
        )
    }

    #[inline]
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            ElemType::I8 | ElemType::I16 | ElemType::I32 | ElemType::I64 | ElemType::I128
        )
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, ElemType::F32 | ElemType::F64)
    }
}

impl fmt::Display for ElemType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_lower())
    }
}

pub trait Typed {
    /// Returns element type
    fn elem_ty(&self) -> ElemType;
}
