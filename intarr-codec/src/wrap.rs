use crate::array::IntArray;
use crate::blob::from_bytes;
use crate::conf::ArrayConf;
use crate::elem::wrap_values;
use crate::error::{Error, Result};
use crate::prim::PrimArray;
use crate::shape::Source;
use intarr_datatype::{ElemDescriptor, ElemValue};

/// Normalize arbitrary source into native array.
///
/// Returns None if the source denotes null. A native array source is
/// returned as-is, aliasing is left to the caller.
pub fn wrap_source<D>(desc: &D, conf: &ArrayConf, value: Source) -> Result<Option<IntArray>>
where
    D: ElemDescriptor<Native = i32>,
{
    let value = match value {
        Source::Driver(mut arr) => {
            log::debug!("extract content of driver array of {}", arr.base_type_name());
            arr.get_array().map_err(Error::DriverAccess)?
        }
        other => other,
    };
    log::debug!("wrap {} into native array", value.describe());
    match value {
        Source::Native(arr) => Ok(Some(arr)),
        // byte blob and stream are deserialization requests.
        Source::Bytes(bytes) => from_bytes(&bytes, conf.blob_limit()).map(Some),
        Source::Stream(stream) => from_bytes(stream.bytes(), conf.blob_limit()).map(Some),
        Source::Primitives(PrimArray::I32(values)) => Ok(Some(IntArray::from(values))),
        Source::Primitives(arr) => wrap_values(desc, arr.iter()).map(Some),
        Source::Objects(values) => wrap_values(desc, values.into_vec().into_iter()).map(Some),
        Source::Scalar(ElemValue::Null) => Ok(None),
        Source::Scalar(ElemValue::I32(v)) if conf.allows_scalar() => {
            Ok(Some(IntArray::from([v])))
        }
        Source::Collection(values) => wrap_values(desc, values).map(Some),
        other @ (Source::Scalar(_) | Source::Text(_) | Source::Driver(_)) => {
            Err(Error::UnknownWrapSource(other.describe()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::to_bytes;
    use crate::error::BoxError;
    use crate::shape::DriverArray;
    use crate::stream::BinaryStream;
    use intarr_datatype::error::Error as DataTypeError;
    use intarr_datatype::I32Descriptor;
    use std::collections::BTreeSet;

    fn wrap(value: Source) -> Result<Option<IntArray>> {
        wrap_source(&I32Descriptor, &ArrayConf::default(), value)
    }

    #[test]
    fn test_wrap_native_no_copy() {
        let arr = IntArray::from([1, 2, 3]);
        let ptr = arr.as_ptr();
        let res = wrap(Source::Native(arr)).unwrap().unwrap();
        assert_eq!(res.as_ptr(), ptr);

        let values: Box<[i32]> = Box::new([5, 6]);
        let ptr = values.as_ptr();
        let res = wrap(Source::Primitives(PrimArray::I32(values))).unwrap().unwrap();
        assert_eq!(res.as_ptr(), ptr);
    }

    #[test]
    fn test_wrap_bytes_and_stream() {
        let arr = IntArray::from([9, -9, 0]);
        let bytes = to_bytes(&arr).unwrap();
        let res = wrap(Source::Bytes(bytes.clone())).unwrap().unwrap();
        assert_eq!(res, arr);
        let res = wrap(Source::Stream(BinaryStream::from(bytes))).unwrap().unwrap();
        assert_eq!(res, arr);

        let conf = ArrayConf::default().max_blob_len(2);
        let bytes = to_bytes(&arr).unwrap();
        assert!(matches!(
            wrap_source(&I32Descriptor, &conf, Source::Bytes(bytes)),
            Err(Error::BlobTooLarge { .. })
        ));
    }

    #[test]
    fn test_wrap_other_arrays() {
        let res = wrap(Source::from(PrimArray::from(vec![1i64, 2, 3])))
            .unwrap()
            .unwrap();
        assert_eq!(res, IntArray::from([1, 2, 3]));
        let res = wrap(Source::from(PrimArray::from(vec![4.0f64])))
            .unwrap()
            .unwrap();
        assert_eq!(res, IntArray::from([4]));
        let objects: Box<[ElemValue]> = Box::new([ElemValue::I16(8), ElemValue::from("-8")]);
        let res = wrap(Source::Objects(objects)).unwrap().unwrap();
        assert_eq!(res, IntArray::from([8, -8]));
        let res = wrap(Source::from(PrimArray::from(Vec::<i8>::new())))
            .unwrap()
            .unwrap();
        assert!(res.is_empty());
    }

    #[test]
    fn test_wrap_element_errors() {
        let res = wrap(Source::from(PrimArray::from(vec![i64::MAX])));
        assert!(matches!(
            res,
            Err(Error::DataType(DataTypeError::OutOfRange { .. }))
        ));
        let objects: Box<[ElemValue]> = Box::new([ElemValue::I32(1), ElemValue::Null]);
        assert!(matches!(
            wrap(Source::Objects(objects)),
            Err(Error::DataType(DataTypeError::NullElement))
        ));
        assert!(matches!(
            wrap(Source::from(PrimArray::from(vec![true]))),
            Err(Error::DataType(DataTypeError::UnsupportedConversion { .. }))
        ));
    }

    #[test]
    fn test_wrap_scalar() {
        assert_eq!(wrap(Source::from(7i32)).unwrap().unwrap(), IntArray::from([7]));
        assert!(wrap(Source::Scalar(ElemValue::Null)).unwrap().is_none());
        match wrap(Source::Scalar(ElemValue::I64(7))) {
            Err(Error::UnknownWrapSource(s)) => assert_eq!(s, "scalar i64"),
            other => panic!("unexpected result {:?}", other),
        }
        let conf = ArrayConf::default().scalar_binding(false);
        assert!(matches!(
            wrap_source(&I32Descriptor, &conf, Source::from(7i32)),
            Err(Error::UnknownWrapSource(_))
        ));
    }

    #[test]
    fn test_wrap_collection() {
        let res = wrap(Source::collection(vec![3i32, 1, 4])).unwrap().unwrap();
        assert_eq!(res, IntArray::from([3, 1, 4]));
        let set: BTreeSet<i64> = [30, 10, 20].into_iter().collect();
        let res = wrap(Source::collection(set)).unwrap().unwrap();
        assert_eq!(res, IntArray::from([10, 20, 30]));
        let res = wrap(Source::collection(Vec::<i32>::new())).unwrap().unwrap();
        assert!(res.is_empty());
    }

    #[test]
    fn test_wrap_text_unknown() {
        match wrap(Source::Text("{1,2}".to_string())) {
            Err(Error::UnknownWrapSource(s)) => assert_eq!(s, "text"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    struct MockDriverArray {
        content: Option<Source>,
    }

    impl DriverArray for MockDriverArray {
        fn base_type_name(&self) -> &str {
            "integer"
        }

        fn get_array(&mut self) -> std::result::Result<Source, BoxError> {
            self.content.take().ok_or_else(|| "connection closed".into())
        }
    }

    #[test]
    fn test_wrap_driver_array() {
        let driver = MockDriverArray {
            content: Some(Source::collection(vec![1i64, 2])),
        };
        let res = wrap(Source::Driver(Box::new(driver))).unwrap().unwrap();
        assert_eq!(res, IntArray::from([1, 2]));

        let driver = MockDriverArray { content: None };
        match wrap(Source::Driver(Box::new(driver))) {
            Err(Error::DriverAccess(e)) => assert_eq!(e.to_string(), "connection closed"),
            other => panic!("unexpected result {:?}", other),
        }

        let nested = MockDriverArray {
            content: Some(Source::Native(IntArray::from([1]))),
        };
        let driver = MockDriverArray {
            content: Some(Source::Driver(Box::new(nested))),
        };
        assert!(matches!(
            wrap(Source::Driver(Box::new(driver))),
            Err(Error::UnknownWrapSource(_))
        ));
    }
}
