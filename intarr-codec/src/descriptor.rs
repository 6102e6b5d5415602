use crate::array::IntArray;
use crate::blob;
use crate::conf::ArrayConf;
use crate::error::Result;
use crate::mutability::ArrayMutability;
use crate::shape::{Repr, Source, TargetType};
use crate::text;
use crate::unwrap::unwrap_array;
use crate::wrap::wrap_source;
use fnv::FnvHasher;
use intarr_datatype::{ElemDescriptor, I32Descriptor};
use std::hash::{Hash, Hasher};

/// Type descriptor of 32-bit integer array.
///
/// It bundles every conversion of the native array: wrap and unwrap
/// between shapes, textual literal, byte blob, equality, hashing and
/// the mutability plan. The descriptor is immutable, so one instance
/// built at startup can be shared by all consumers.
#[derive(Debug, Clone, Default)]
pub struct IntArrayDescriptor<D = I32Descriptor> {
    elem: D,
    conf: ArrayConf,
}

impl IntArrayDescriptor<I32Descriptor> {
    #[inline]
    pub fn new(conf: ArrayConf) -> Self {
        IntArrayDescriptor {
            elem: I32Descriptor,
            conf,
        }
    }
}

impl<D: ElemDescriptor<Native = i32>> IntArrayDescriptor<D> {
    /// Create descriptor with custom element descriptor.
    #[inline]
    pub fn with_elem(elem: D, conf: ArrayConf) -> Self {
        IntArrayDescriptor { elem, conf }
    }

    #[inline]
    pub fn elem(&self) -> &D {
        &self.elem
    }

    #[inline]
    pub fn conf(&self) -> &ArrayConf {
        &self.conf
    }

    #[inline]
    pub fn mutability(&self) -> ArrayMutability {
        ArrayMutability
    }

    /// Two nulls are equal, otherwise element-wise comparison.
    #[inline]
    pub fn are_equal(&self, one: Option<&IntArray>, another: Option<&IntArray>) -> bool {
        one == another
    }

    /// Order-sensitive hash, stable across processes.
    #[inline]
    pub fn extract_hash(&self, value: &IntArray) -> u64 {
        let mut hasher = FnvHasher::default();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[inline]
    pub fn loggable(&self, value: Option<&IntArray>) -> String {
        match value {
            Some(arr) => arr.to_string(),
            None => "null".to_string(),
        }
    }

    #[inline]
    pub fn to_string(&self, value: Option<&IntArray>) -> Option<String> {
        value.map(|arr| text::to_text(arr))
    }

    #[inline]
    pub fn from_string(&self, literal: Option<&str>) -> Result<Option<IntArray>> {
        literal.map(text::from_text).transpose()
    }

    #[inline]
    pub fn to_bytes(&self, value: &IntArray) -> Result<Vec<u8>> {
        blob::to_bytes(value)
    }

    #[inline]
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<IntArray> {
        blob::from_bytes(bytes, self.conf.blob_limit())
    }

    /// Project native array into target shape.
    #[inline]
    pub fn unwrap(&self, value: Option<IntArray>, target: TargetType) -> Result<Option<Repr>> {
        value
            .map(|arr| unwrap_array(&self.elem, arr, target))
            .transpose()
    }

    /// Normalize external value into native array.
    #[inline]
    pub fn wrap(&self, value: Option<Source>) -> Result<Option<IntArray>> {
        match value {
            Some(value) => wrap_source(&self.elem, &self.conf, value),
            None => Ok(None),
        }
    }
}
