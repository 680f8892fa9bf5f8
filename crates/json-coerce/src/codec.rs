//! Whole-document encode and decode, delegated to `serde_json`.
//!
//! The optional-returning functions fold every failure into `None` and log
//! the reason at debug level. [`try_decode`] and [`try_encode_serializable`]
//! keep the reason.

use serde::Serialize;
use serde_json::Value;

use crate::access::{JsonArray, JsonObject};
use crate::error::JsonError;

mod finite;
mod unicode;

/// Transcode to UTF-8 if needed, then parse.
fn parse(data: &[u8]) -> Result<Value, JsonError> {
    let text = unicode::to_utf8(data).map_err(|e| JsonError::MalformedJson(e.to_string()))?;
    serde_json::from_slice(&text).map_err(|e| JsonError::MalformedJson(e.to_string()))
}

/// Decode JSON bytes into a value tree.
///
/// The bytes may be UTF-8, UTF-16 or UTF-32 in either byte order, with or
/// without a byte-order mark.
///
/// ```
/// use json_coerce::codec::decode;
///
/// assert!(decode(br#"{"foo":"bar"}"#).is_some());
/// assert!(decode(br#"{"foo":"#).is_none());
/// assert!(decode(b"\xFF\xFE[\x001\x00]\x00").is_some());
/// ```
pub fn decode(data: &[u8]) -> Option<Value> {
    match parse(data) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = %err, len = data.len(), "failed to decode JSON");
            None
        }
    }
}

/// Decode JSON text into a value tree.
pub fn decode_str(text: &str) -> Option<Value> {
    decode(text.as_bytes())
}

/// Decode JSON text, reporting why it is malformed.
pub fn try_decode(text: &str) -> Result<Value, JsonError> {
    parse(text.as_bytes())
}

/// Decode a document whose root must be an object.
pub fn decode_object(data: &[u8]) -> Option<JsonObject> {
    match decode(data)? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

pub fn decode_object_str(text: &str) -> Option<JsonObject> {
    decode_object(text.as_bytes())
}

/// Decode a document whose root must be an array.
pub fn decode_array(data: &[u8]) -> Option<JsonArray> {
    match decode(data)? {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

pub fn decode_array_str(text: &str) -> Option<JsonArray> {
    decode_array(text.as_bytes())
}

/// Encode a value as compact JSON bytes. `None` in, `None` out.
pub fn encode(value: Option<&Value>) -> Option<Vec<u8>> {
    let value = value?;
    match serde_json::to_vec(value) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            tracing::debug!(error = %err, "failed to encode JSON");
            None
        }
    }
}

/// Encode a value as compact JSON text. `None` in, `None` out.
pub fn encode_string(value: Option<&Value>) -> Option<String> {
    let bytes = encode(value)?;
    // serde_json only ever writes UTF-8
    String::from_utf8(bytes).ok()
}

/// Encode any serializable value, failing on anything JSON cannot express.
///
/// `serde_json` writes NaN and infinities as `null`; here they are errors, as
/// are maps with non-string keys.
///
/// # Errors
///
/// Returns `JsonError::Unencodable` with the serializer's reason.
pub fn try_encode_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, JsonError> {
    reject_non_finite(value)?;
    serde_json::to_vec(value).map_err(|e| JsonError::Unencodable(e.to_string()))
}

/// Walk the value with a serializer that only inspects floats.
fn reject_non_finite<T: Serialize + ?Sized>(value: &T) -> Result<(), JsonError> {
    value
        .serialize(finite::FiniteCheck)
        .map_err(|e| JsonError::Unencodable(e.to_string()))
}

/// Like [`try_encode_serializable`], folding failures into `None`.
pub fn encode_serializable<T: Serialize + ?Sized>(value: &T) -> Option<Vec<u8>> {
    match try_encode_serializable(value) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            tracing::debug!(error = %err, "failed to encode JSON");
            None
        }
    }
}
