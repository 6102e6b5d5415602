//! Textual literal of integer array.
//!
//! The literal is `{` followed by decimal elements separated by `,`
//! and closed by `}`, e.g. `{1,-2,3}`. Empty array is `{}`.
//! No whitespace is allowed anywhere and no trailing comma is
//! written or accepted.
use crate::array::IntArray;
use crate::error::{Error, Result};
use smallvec::SmallVec;

pub const LITERAL_START: char = '{';
pub const LITERAL_END: char = '}';
pub const LITERAL_DELIM: char = ',';

/// Format array as textual literal.
#[inline]
pub fn to_text(values: &[i32]) -> String {
    // "-2147483648" takes at most 11 chars.
    let mut res = String::with_capacity(2 + values.len() * 12);
    res.push(LITERAL_START);
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            res.push(LITERAL_DELIM);
        }
        res.push_str(&v.to_string());
    }
    res.push(LITERAL_END);
    res
}

/// Parse textual literal into array.
pub fn from_text(text: &str) -> Result<IntArray> {
    let inner = text
        .strip_prefix(LITERAL_START)
        .and_then(|s| s.strip_suffix(LITERAL_END))
        .ok_or_else(|| {
            Error::MalformedLiteral(format!(
                "first and last character must be {} and {}, got {:?}",
                LITERAL_START, LITERAL_END, text
            ))
        })?;
    if inner.is_empty() {
        return Ok(IntArray::default());
    }
    let mut elems: SmallVec<[i32; 16]> = SmallVec::new();
    for (idx, elem) in inner.split(LITERAL_DELIM).enumerate() {
        if elem.is_empty() {
            return Err(Error::MalformedLiteral(format!(
                "empty element at position {} of {:?}",
                idx, text
            )));
        }
        let v = elem.parse::<i32>().map_err(|e| {
            Error::MalformedLiteral(format!(
                "invalid element {:?} at position {} of {:?}: {}",
                elem, idx, text, e
            ))
        })?;
        elems.push(v);
    }
    log::trace!("parsed array literal of {} elements", elems.len());
    Ok(IntArray::from(elems.into_vec()))
}
