//! Key, index and JSON Pointer (RFC 6901) primitives.
//!
//! This crate names the slots that typed accessors read from: a [`Key`] is an
//! object member name or an array index, and a JSON Pointer chains such steps
//! into a path through nested containers.
//!
//! # Example
//!
//! ```
//! use json_coerce_pointer::{get, get_by_pointer, parse_json_pointer};
//!
//! let path = parse_json_pointer("/foo/1");
//! assert_eq!(path, vec!["foo".to_string(), "1".to_string()]);
//!
//! let doc = serde_json::json!({"foo": [10, 20]});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!(20)));
//! assert_eq!(get_by_pointer(&doc, "/foo/5"), None);
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod types;
pub use types::{Key, Path, PathStep};

pub mod validate;
pub use validate::{validate_json_pointer, validate_path, MAX_PATH_LENGTH, MAX_POINTER_LENGTH};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    #[error("Path too long")]
    PathTooLong,
}

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// ```
/// use json_coerce_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 before ~0, so "~01" stays "~1"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// ```
/// use json_coerce_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into unescaped path components.
///
/// The empty string is the root (no components). A pointer without a leading
/// `/` is read as if it had one.
///
/// ```
/// use json_coerce_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/').map(unescape_component).collect()
}

/// Format path components into a JSON Pointer string.
///
/// ```
/// use json_coerce_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["a/b".to_string(), "0".to_string()]), "/a~1b/0");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if a string is a canonical array index: ASCII digits, no sign, and
/// no leading zero unless it is `"0"` itself.
pub fn is_valid_index(index: &str) -> bool {
    let bytes = index.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}

/// Parse a canonical array index, or `None`.
pub fn parse_index(index: &str) -> Option<usize> {
    if !is_valid_index(index) {
        return None;
    }
    index.parse().ok()
}

/// Get a value from a JSON document by path.
///
/// Returns `None` if any step is missing, addresses a scalar, or is not a
/// valid index into an array.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get(parse_index(step)?)?,
            Value::Object(map) => map.get(step)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a value from a JSON document by pointer string.
pub fn get_by_pointer<'a>(val: &'a Value, pointer: &str) -> Option<&'a Value> {
    get(val, &parse_json_pointer(pointer))
}

/// Find a value by pointer string, reporting why a lookup failed.
///
/// # Errors
///
/// - `PointerError::PointerInvalid` / `PointerTooLong` for a malformed pointer
/// - `PointerError::InvalidIndex` if a step into an array is not an index
/// - `PointerError::NotFound` if a step is missing or addresses a scalar
///
/// ```
/// use json_coerce_pointer::{find_by_pointer, PointerError};
/// use serde_json::json;
///
/// let doc = json!({"a": [1, 2]});
/// assert_eq!(find_by_pointer(&doc, "/a/1"), Ok(&json!(2)));
/// assert_eq!(find_by_pointer(&doc, "/a/x"), Err(PointerError::InvalidIndex));
/// ```
pub fn find_by_pointer<'a>(val: &'a Value, pointer: &str) -> Result<&'a Value, PointerError> {
    validate_json_pointer(pointer)?;
    let path = parse_json_pointer(pointer);
    validate_path(&path)?;
    find(val, &path)
}

/// Find a value by path, reporting why a lookup failed.
///
/// Unlike [`get`], a step into an array that is not a canonical index is an
/// `InvalidIndex` error rather than a plain miss.
pub fn find<'a>(val: &'a Value, path: &[String]) -> Result<&'a Value, PointerError> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => {
                let idx = parse_index(step).ok_or(PointerError::InvalidIndex)?;
                arr.get(idx).ok_or(PointerError::NotFound)?
            }
            Value::Object(map) => map.get(step).ok_or(PointerError::NotFound)?,
            _ => return Err(PointerError::NotFound),
        };
    }
    Ok(current)
}
