use crate::shape::TargetType;
use intarr_datatype::error::Error as DataTypeError;
use intarr_datatype::ElemType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by a driver when it cannot materialize an array.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed array literal: {0}")]
    MalformedLiteral(String),
    #[error("unknown unwrap target: {0}")]
    UnknownUnwrapTarget(TargetType),
    #[error("unknown wrap source: {0}")]
    UnknownWrapSource(String),
    #[error("driver array access failed: {0}")]
    DriverAccess(#[source] BoxError),
    #[error(transparent)]
    DataType(#[from] DataTypeError),
    #[error("encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    #[error("blob holds array of {0}")]
    BlobTypeMismatch(ElemType),
    #[error("blob too large({len} > {max})")]
    BlobTooLarge { len: usize, max: usize },
    #[error("Invalid format")]
    InvalidFormat,
    #[error("length mismatch(expected {expected}, actual {actual})")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("index out of bound({0})")]
    IndexOutOfBound(usize),
}
