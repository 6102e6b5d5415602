/// Default upper bound of byte blob accepted for deserialization.
pub const DEFAULT_MAX_BLOB_LEN: usize = 64 * 1024 * 1024;

/// Configuration of array codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayConf {
    max_blob_len: usize,
    scalar_binding: bool,
}

impl Default for ArrayConf {
    #[inline]
    fn default() -> Self {
        ArrayConf {
            max_blob_len: DEFAULT_MAX_BLOB_LEN,
            scalar_binding: true,
        }
    }
}

impl ArrayConf {
    /// Blobs and streams longer than this are rejected before decoding.
    #[inline]
    pub fn max_blob_len(mut self, max_blob_len: usize) -> Self {
        self.max_blob_len = max_blob_len;
        self
    }

    /// Whether a single integer is accepted as one-element array.
    #[inline]
    pub fn scalar_binding(mut self, scalar_binding: bool) -> Self {
        self.scalar_binding = scalar_binding;
        self
    }

    #[inline]
    pub fn blob_limit(&self) -> usize {
        self.max_blob_len
    }

    #[inline]
    pub fn allows_scalar(&self) -> bool {
        self.scalar_binding
    }
}
