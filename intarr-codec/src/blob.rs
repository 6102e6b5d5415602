//! Byte blob of integer array.
//!
//! Blob is the fallback representation used when the storage accepts
//! neither native arrays nor structured streams. It is encoded by
//! bincode with standard configuration and carries element type, length
//! and all elements, so it can be decoded without outside knowledge.
use crate::array::IntArray;
use crate::error::{Error, Result};
use intarr_datatype::ElemType;
use serde::{Deserialize, Serialize};

const BLOB_CONFIG: bincode::config::Configuration = bincode::config::standard();

#[derive(Serialize)]
struct BlobRef<'a> {
    elem: ElemType,
    data: &'a [i32],
}

#[derive(Deserialize)]
struct BlobOwned {
    elem: ElemType,
    data: Box<[i32]>,
}

/// Serialize array into byte blob.
#[inline]
pub fn to_bytes(values: &[i32]) -> Result<Vec<u8>> {
    let blob = BlobRef {
        elem: ElemType::I32,
        data: values,
    };
    let res = bincode::serde::encode_to_vec(&blob, BLOB_CONFIG)?;
    log::trace!("serialized array of {} elements into {} bytes", values.len(), res.len());
    Ok(res)
}

/// Deserialize array from byte blob.
///
/// The returned array never shares storage with input bytes.
pub fn from_bytes(bytes: &[u8], max_len: usize) -> Result<IntArray> {
    if bytes.len() > max_len {
        return Err(Error::BlobTooLarge {
            len: bytes.len(),
            max: max_len,
        });
    }
    let (blob, n_bytes): (BlobOwned, usize) =
        bincode::serde::decode_from_slice(bytes, BLOB_CONFIG)?;
    if n_bytes != bytes.len() {
        return Err(Error::InvalidFormat);
    }
    if blob.elem != ElemType::I32 {
        return Err(Error::BlobTypeMismatch(blob.elem));
    }
    log::trace!("deserialized array of {} elements", blob.data.len());
    Ok(IntArray::from(blob.data))
}
