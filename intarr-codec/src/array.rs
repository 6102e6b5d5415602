use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// IntArray is the native form of an integer array.
///
/// Length is fixed at construction but elements are mutable in place.
/// Every element is present, there is no null element.
/// Equality, ordering and hashing are element-wise and order-sensitive.
/// Clone always allocates new storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntArray(Box<[i32]>);

impl IntArray {
    /// Create an array of given length with all elements zero.
    #[inline]
    pub fn zeroed(len: usize) -> Self {
        IntArray(vec![0; len].into_boxed_slice())
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.0
    }

    /// Copy all elements into new storage.
    #[inline]
    pub fn deep_copy(&self) -> Self {
        IntArray(Box::from(&self.0[..]))
    }

    /// Returns whether both arrays share the same backing storage.
    #[inline]
    pub fn same_storage(&self, other: &IntArray) -> bool {
        std::ptr::eq(self.0.as_ptr(), other.0.as_ptr()) && self.len() == other.len()
    }

    #[inline]
    pub fn into_boxed_slice(self) -> Box<[i32]> {
        self.0
    }
}

impl Deref for IntArray {
    type Target = [i32];
    #[inline]
    fn deref(&self) -> &[i32] {
        &self.0
    }
}

impl DerefMut for IntArray {
    #[inline]
    fn deref_mut(&mut self) -> &mut [i32] {
        &mut self.0
    }
}

impl From<Box<[i32]>> for IntArray {
    #[inline]
    fn from(src: Box<[i32]>) -> Self {
        IntArray(src)
    }
}

impl From<Vec<i32>> for IntArray {
    #[inline]
    fn from(src: Vec<i32>) -> Self {
        IntArray(src.into_boxed_slice())
    }
}

impl From<&[i32]> for IntArray {
    #[inline]
    fn from(src: &[i32]) -> Self {
        IntArray(Box::from(src))
    }
}

impl<const N: usize> From<[i32; N]> for IntArray {
    #[inline]
    fn from(src: [i32; N]) -> Self {
        IntArray(Box::new(src))
    }
}

impl FromIterator<i32> for IntArray {
    #[inline]
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        IntArray(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a IntArray {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Display in loggable form, e.g. `[1, 2, 3]`.
impl fmt::Display for IntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", v)?;
        }
        f.write_str("]")
    }
}
