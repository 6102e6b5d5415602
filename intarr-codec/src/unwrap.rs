use crate::array::IntArray;
use crate::blob::to_bytes;
use crate::elem::{unwrap_objects, unwrap_primitives};
use crate::error::{Error, Result};
use crate::shape::{Repr, TargetType};
use crate::stream::BinaryStream;
use intarr_datatype::{ElemDescriptor, ElemType};

/// Project native array into requested target shape.
///
/// Native target returns the input itself without copy. All other
/// targets build new values.
pub fn unwrap_array<D>(desc: &D, value: IntArray, target: TargetType) -> Result<Repr>
where
    D: ElemDescriptor<Native = i32>,
{
    log::debug!("unwrap array of {} elements to {}", value.len(), target);
    match target {
        TargetType::Native | TargetType::PrimitiveArray(ElemType::I32) => Ok(Repr::Native(value)),
        TargetType::ObjectArray(ty) => unwrap_objects(desc, &value, ty).map(Repr::Objects),
        // serialize on demand, only when caller wants opaque bytes.
        TargetType::Bytes => to_bytes(&value).map(Repr::Bytes),
        TargetType::BinaryStream => {
            to_bytes(&value).map(|bytes| Repr::Stream(BinaryStream::from(bytes)))
        }
        TargetType::PrimitiveArray(ty) => match unwrap_primitives(desc, &value, ty)? {
            Some(arr) => Ok(Repr::Primitives(arr)),
            None => Err(Error::UnknownUnwrapTarget(target)),
        },
        TargetType::Scalar(_) | TargetType::Text => Err(Error::UnknownUnwrapTarget(target)),
    }
}
