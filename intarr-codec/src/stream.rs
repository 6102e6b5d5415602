use std::io::Cursor;
use std::sync::Arc;

/// Binary stream backed by immutable shared bytes.
///
/// It is the structured carrier of serialized arrays when the consumer
/// reads values as streams instead of plain byte blobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryStream {
    data: Arc<[u8]>,
}

#[allow(clippy::len_without_is_empty)]
impl BinaryStream {
    #[inline]
    pub fn new(data: Arc<[u8]>) -> Self {
        BinaryStream { data }
    }

    /// Returns all bytes of the stream.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns length of the stream in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns a reader positioned at start of the stream.
    #[inline]
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.bytes())
    }

    #[inline]
    pub fn into_inner(self) -> Arc<[u8]> {
        self.data
    }
}

impl From<Vec<u8>> for BinaryStream {
    #[inline]
    fn from(src: Vec<u8>) -> Self {
        BinaryStream::new(Arc::from(src))
    }
}

impl From<&[u8]> for BinaryStream {
    #[inline]
    fn from(src: &[u8]) -> Self {
        BinaryStream::new(Arc::from(src))
    }
}
