use crate::array::IntArray;

/// Describes how values of a type are copied when they cross a
/// caching or comparison boundary.
pub trait MutabilityPlan<T> {
    /// Cached form of the value.
    type Cached;

    fn is_mutable(&self) -> bool;

    fn deep_copy(&self, value: Option<&T>) -> Option<T>;

    /// Convert live value into cached form.
    fn disassemble(&self, value: Option<&T>) -> Option<Self::Cached>;

    /// Convert cached form back into live value.
    fn assemble(&self, cached: Option<&Self::Cached>) -> Option<T>;
}

/// Mutability plan of integer array.
///
/// Arrays are mutable, so both directions copy: the cached array and
/// the live array never share storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayMutability;

impl MutabilityPlan<IntArray> for ArrayMutability {
    type Cached = IntArray;

    #[inline]
    fn is_mutable(&self) -> bool {
        true
    }

    #[inline]
    fn deep_copy(&self, value: Option<&IntArray>) -> Option<IntArray> {
        value.map(IntArray::deep_copy)
    }

    #[inline]
    fn disassemble(&self, value: Option<&IntArray>) -> Option<IntArray> {
        self.deep_copy(value)
    }

    #[inline]
    fn assemble(&self, cached: Option<&IntArray>) -> Option<IntArray> {
        self.deep_copy(cached)
    }
}
