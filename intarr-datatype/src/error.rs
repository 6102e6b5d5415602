use crate::ElemType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unsupported conversion from {from} to {to}")]
    UnsupportedConversion { from: ElemType, to: ElemType },
    #[error("value {value} out of range of {ty}")]
    OutOfRange { value: String, ty: ElemType },
    #[error("null element")]
    NullElement,
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}
