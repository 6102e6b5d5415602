use crate::array::IntArray;
use crate::error::BoxError;
use crate::prim::PrimArray;
use crate::stream::BinaryStream;
use intarr_datatype::{ElemType, ElemValue, Typed};
use std::fmt;

/// Target shape requested from unwrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// The native integer array itself.
    Native,
    /// Array of boxed values of given component type.
    ObjectArray(ElemType),
    /// Serialized byte blob.
    Bytes,
    /// Binary stream over serialized bytes.
    BinaryStream,
    /// Unboxed array of given primitive type.
    PrimitiveArray(ElemType),
    /// Single boxed value. No array converts to it.
    Scalar(ElemType),
    /// Textual literal. Goes through `to_text` instead of unwrap.
    Text,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Native => f.write_str("native i32 array"),
            TargetType::ObjectArray(ty) => write!(f, "object array of {}", ty),
            TargetType::Bytes => f.write_str("bytes"),
            TargetType::BinaryStream => f.write_str("binary stream"),
            TargetType::PrimitiveArray(ty) => write!(f, "primitive array of {}", ty),
            TargetType::Scalar(ty) => write!(f, "scalar {}", ty),
            TargetType::Text => f.write_str("text"),
        }
    }
}

/// Value produced by unwrap.
#[derive(Debug, Clone, PartialEq)]
pub enum Repr {
    Native(IntArray),
    Objects(Box<[ElemValue]>),
    Primitives(PrimArray),
    Bytes(Vec<u8>),
    Stream(BinaryStream),
}

impl Repr {
    #[inline]
    pub fn as_native(&self) -> Option<&IntArray> {
        match self {
            Repr::Native(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    pub fn into_native(self) -> Option<IntArray> {
        match self {
            Repr::Native(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    pub fn as_objects(&self) -> Option<&[ElemValue]> {
        match self {
            Repr::Objects(values) => Some(values),
            _ => None,
        }
    }

    #[inline]
    pub fn as_primitives(&self) -> Option<&PrimArray> {
        match self {
            Repr::Primitives(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Repr::Bytes(bytes) => Some(bytes),
            Repr::Stream(stream) => Some(stream.bytes()),
            _ => None,
        }
    }
}

/// Array handle owned by a database driver.
///
/// Its content must be extracted explicitly, which may need the
/// underlying connection and therefore may block or fail.
pub trait DriverArray: Send {
    /// Driver-side name of the element type, used in diagnostics.
    fn base_type_name(&self) -> &str;

    /// Materialize content of the array.
    fn get_array(&mut self) -> std::result::Result<Source, BoxError>;
}

/// Ordered collection of boxed values with known size.
pub type Collection = Box<dyn ExactSizeIterator<Item = ElemValue> + Send>;

/// Value accepted by wrap.
pub enum Source {
    Driver(Box<dyn DriverArray>),
    Native(IntArray),
    /// Serialized byte blob.
    Bytes(Vec<u8>),
    Stream(BinaryStream),
    /// Array of boxed values.
    Objects(Box<[ElemValue]>),
    /// Unboxed array of other primitive type.
    Primitives(PrimArray),
    /// Single value, bound as one-element array.
    Scalar(ElemValue),
    Collection(Collection),
    /// Textual literal. Goes through `from_text` instead of wrap.
    Text(String),
}

impl Source {
    /// Create source from ordered collection.
    #[inline]
    pub fn collection<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ElemValue> + 'static,
        I::IntoIter: ExactSizeIterator + Send + 'static,
    {
        Source::Collection(Box::new(
            values.into_iter().map(<I::Item as Into<ElemValue>>::into),
        ))
    }

    /// Describe kind of the source, used in logs and errors.
    pub fn describe(&self) -> String {
        match self {
            Source::Driver(arr) => format!("driver array of {}", arr.base_type_name()),
            Source::Native(_) => "native i32 array".to_string(),
            Source::Bytes(_) => "bytes".to_string(),
            Source::Stream(_) => "binary stream".to_string(),
            Source::Objects(_) => "object array".to_string(),
            Source::Primitives(arr) => format!("primitive array of {}", arr.elem_ty()),
            Source::Scalar(v) => format!("scalar {}", v.elem_ty()),
            Source::Collection(_) => "collection".to_string(),
            Source::Text(_) => "text".to_string(),
        }
    }
}

impl fmt::Debug for Source {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Source").field(&self.describe()).finish()
    }
}

impl From<Repr> for Source {
    #[inline]
    fn from(src: Repr) -> Self {
        match src {
            Repr::Native(arr) => Source::Native(arr),
            Repr::Objects(values) => Source::Objects(values),
            Repr::Primitives(arr) => Source::Primitives(arr),
            Repr::Bytes(bytes) => Source::Bytes(bytes),
            Repr::Stream(stream) => Source::Stream(stream),
        }
    }
}

impl From<IntArray> for Source {
    #[inline]
    fn from(src: IntArray) -> Self {
        Source::Native(src)
    }
}

impl From<PrimArray> for Source {
    #[inline]
    fn from(src: PrimArray) -> Self {
        Source::Primitives(src)
    }
}

impl From<ElemValue> for Source {
    #[inline]
    fn from(src: ElemValue) -> Self {
        Source::Scalar(src)
    }
}

impl From<i32> for Source {
    #[inline]
    fn from(src: i32) -> Self {
        Source::Scalar(ElemValue::I32(src))
    }
}
