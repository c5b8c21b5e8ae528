//! Inspection and unpacking of key-tagged values

use serde::Serialize;
use serde_json::Value;

use crate::error::ConformanceError;

/// The key and payload of a key-tagged value, as a named pair.
///
/// Returned by [`unpack_record`]; borrows from the inspected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unpacked<'a> {
    /// The single key, naming the variant
    pub key: &'a str,
    /// The variant's payload
    pub value: &'a Value,
}

/// Returns the single key of a key-tagged value.
///
/// For objects this is the lone entry's name; for one-element arrays it is
/// the populated index rendered as a string, always `"0"` since JSON arrays
/// have no holes.
///
/// ```
/// use key_tagged::get_key;
/// use serde_json::json;
///
/// assert_eq!(get_key(&json!({ "foo": 1 }))?, "foo");
/// assert_eq!(get_key(&json!([42]))?, "0");
/// # Ok::<(), key_tagged::ConformanceError>(())
/// ```
///
/// # Errors
///
/// Returns a [`ConformanceError`] when the value is not composite, or when
/// its key count is 0 or greater than one. The error reports the actual
/// count found.
pub fn get_key(value: &Value) -> Result<&str, ConformanceError> {
    single_entry(value).map(|(key, _)| key)
}

/// Given any value, returns whether it is a conforming key-tagged value.
/// That is, an object or array with exactly one member.
///
/// Pure predicate; never fails.
pub fn is_key_tagged_value(value: &Value) -> bool {
    get_key(value).is_ok()
}

/// Returns the key and payload of a key-tagged value as an ordered pair.
///
/// ```
/// use key_tagged::unpack;
/// use serde_json::json;
///
/// let value = json!({ "content": 42 });
/// let (key, payload) = unpack(&value)?;
///
/// assert_eq!(key, "content");
/// assert_eq!(payload, &json!(42));
/// # Ok::<(), key_tagged::ConformanceError>(())
/// ```
///
/// # Errors
///
/// Fails with a [`ConformanceError`] under the same conditions as
/// [`get_key`].
pub fn unpack(value: &Value) -> Result<(&str, &Value), ConformanceError> {
    single_entry(value)
}

/// Like [`unpack`], but returns a record with `key` and `value` fields.
///
/// ```
/// use key_tagged::unpack_record;
/// use serde_json::json;
///
/// let value = json!({ "content": 42 });
/// let record = unpack_record(&value)?;
///
/// assert_eq!(record.key, "content");
/// assert_eq!(record.value, &json!(42));
/// # Ok::<(), key_tagged::ConformanceError>(())
/// ```
///
/// # Errors
///
/// Fails with a [`ConformanceError`] under the same conditions as
/// [`get_key`].
pub fn unpack_record(value: &Value) -> Result<Unpacked<'_>, ConformanceError> {
    let (key, value) = single_entry(value)?;
    Ok(Unpacked { key, value })
}

/// The one primitive everything else delegates to: the single member of a
/// conforming value, or the reason there isn't one.
fn single_entry(value: &Value) -> Result<(&str, &Value), ConformanceError> {
    match value {
        Value::Object(map) => {
            let mut entries = map.iter();

            match (entries.next(), entries.next()) {
                (Some((key, payload)), None) => Ok((key.as_str(), payload)),
                _ => Err(ConformanceError::KeyCount { count: map.len() }),
            }
        }
        Value::Array(items) => match items.as_slice() {
            [payload] => Ok(("0", payload)),
            _ => Err(ConformanceError::KeyCount {
                count: items.len(),
            }),
        },
        other => Err(ConformanceError::NotComposite {
            kind: kind_of(other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
