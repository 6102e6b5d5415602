//! Codec of 32-bit integer arrays.
//!
//! The native array converts from and to a textual literal, a byte
//! blob, a binary stream, object arrays, primitive arrays of other
//! element types, single scalars and ordered collections.
//! `wrap` normalizes external values into the native array and
//! `unwrap` projects the native array into the shape a consumer needs.
pub mod array;
pub mod blob;
pub mod conf;
pub mod descriptor;
pub mod elem;
pub mod error;
pub mod mutability;
pub mod prim;
pub mod shape;
pub mod stream;
pub mod text;
pub mod unwrap;
pub mod wrap;

pub mod prelude {
    pub use crate::array::IntArray;
    pub use crate::conf::ArrayConf;
    pub use crate::descriptor::IntArrayDescriptor;
    pub use crate::error::{BoxError, Error, Result};
    pub use crate::mutability::{ArrayMutability, MutabilityPlan};
    pub use crate::prim::PrimArray;
    pub use crate::shape::{DriverArray, Repr, Source, TargetType};
    pub use crate::stream::BinaryStream;
    pub use intarr_datatype::{ElemDescriptor, ElemType, ElemValue, I32Descriptor, Typed};
}
