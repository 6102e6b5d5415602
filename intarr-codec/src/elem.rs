//! Element-wise conversion between integer array and arrays of other
//! element types. Every element goes through the element descriptor.
use crate::array::IntArray;
use crate::error::{Error, Result};
use crate::prim::PrimArray;
use intarr_datatype::{ElemDescriptor, ElemType, ElemValue};

#[inline]
pub fn wrap_element<D>(desc: &D, value: &ElemValue) -> Result<i32>
where
    D: ElemDescriptor<Native = i32>,
{
    Ok(desc.wrap(value)?)
}

#[inline]
pub fn unwrap_element<D>(desc: &D, value: i32, ty: ElemType) -> Result<ElemValue>
where
    D: ElemDescriptor<Native = i32>,
{
    Ok(desc.unwrap(value, ty)?)
}

/// Convert to object array with given component type.
pub fn unwrap_objects<D>(desc: &D, values: &[i32], ty: ElemType) -> Result<Box<[ElemValue]>>
where
    D: ElemDescriptor<Native = i32>,
{
    values
        .iter()
        .map(|v| unwrap_element(desc, *v, ty))
        .collect()
}

/// Convert to primitive array with given element type.
/// Returns None if the type has no primitive array.
pub fn unwrap_primitives<D>(desc: &D, values: &[i32], ty: ElemType) -> Result<Option<PrimArray>>
where
    D: ElemDescriptor<Native = i32>,
{
    let mut res = match PrimArray::with_len(ty, values.len()) {
        Some(res) => res,
        None => return Ok(None),
    };
    for (i, v) in values.iter().enumerate() {
        res.set(i, unwrap_element(desc, *v, ty)?)?;
    }
    Ok(Some(res))
}

/// Convert boxed values into integer array.
///
/// The array is allocated by the reported length of the iterator and
/// filled in iteration order.
pub fn wrap_values<D, I>(desc: &D, values: I) -> Result<IntArray>
where
    D: ElemDescriptor<Native = i32>,
    I: ExactSizeIterator<Item = ElemValue>,
{
    let expected = values.len();
    let mut res = IntArray::zeroed(expected);
    let mut actual = 0;
    for v in values {
        if actual == expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: actual + 1,
            });
        }
        res[actual] = wrap_element(desc, &v)?;
        actual += 1;
    }
    if actual != expected {
        return Err(Error::LengthMismatch { expected, actual });
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use intarr_datatype::error::Error as DataTypeError;
    use intarr_datatype::I32Descriptor;

    #[test]
    fn test_unwrap_objects() {
        let res = unwrap_objects(&I32Descriptor, &[1, -2], ElemType::I64).unwrap();
        assert_eq!(&*res, &[ElemValue::I64(1), ElemValue::I64(-2)]);
        let res = unwrap_objects(&I32Descriptor, &[3], ElemType::String).unwrap();
        assert_eq!(&*res, &[ElemValue::from("3")]);
        let res = unwrap_objects(&I32Descriptor, &[], ElemType::Bool).unwrap();
        assert!(res.is_empty());
        assert!(matches!(
            unwrap_objects(&I32Descriptor, &[1], ElemType::Bool),
            Err(Error::DataType(DataTypeError::UnsupportedConversion { .. }))
        ));
    }

    #[test]
    fn test_unwrap_primitives() {
        let res = unwrap_primitives(&I32Descriptor, &[1, 2], ElemType::F64)
            .unwrap()
            .unwrap();
        assert_eq!(res, PrimArray::from(vec![1.0f64, 2.0]));
        let res = unwrap_primitives(&I32Descriptor, &[1, 2], ElemType::String).unwrap();
        assert!(res.is_none());
        assert!(matches!(
            unwrap_primitives(&I32Descriptor, &[1, 300], ElemType::I8),
            Err(Error::DataType(DataTypeError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_wrap_values() {
        let values = vec![ElemValue::I64(3), ElemValue::I8(1), ElemValue::from("4")];
        let res = wrap_values(&I32Descriptor, values.into_iter()).unwrap();
        assert_eq!(res, IntArray::from([3, 1, 4]));
        let values = vec![ElemValue::I32(3), ElemValue::Null];
        assert!(matches!(
            wrap_values(&I32Descriptor, values.into_iter()),
            Err(Error::DataType(DataTypeError::NullElement))
        ));
    }

    struct LyingIter {
        reported: usize,
        remaining: usize,
    }

    impl Iterator for LyingIter {
        type Item = ElemValue;
        fn next(&mut self) -> Option<ElemValue> {
            if self.remaining == 0 {
                None
            } else {
                self.remaining -= 1;
                Some(ElemValue::I32(1))
            }
        }
        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.reported, Some(self.reported))
        }
    }

    impl ExactSizeIterator for LyingIter {}

    #[test]
    fn test_wrap_values_length_mismatch() {
        let iter = LyingIter {
            reported: 2,
            remaining: 3,
        };
        assert!(matches!(
            wrap_values(&I32Descriptor, iter),
            Err(Error::LengthMismatch { expected: 2, actual: 3 })
        ));
        let iter = LyingIter {
            reported: 3,
            remaining: 1,
        };
        assert!(matches!(
            wrap_values(&I32Descriptor, iter),
            Err(Error::LengthMismatch { expected: 3, actual: 1 })
        ));
    }
}
