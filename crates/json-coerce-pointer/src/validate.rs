//! Limits applied before a strict pointer walk.
//!
//! [`crate::find_by_pointer`] checks a pointer against these before
//! resolving it; the lenient [`crate::get_by_pointer`] does not.

use crate::PointerError;

/// Longest pointer, in bytes, a strict lookup accepts.
pub const MAX_POINTER_LENGTH: usize = 1024;

/// Deepest path, in steps, a strict lookup accepts.
pub const MAX_PATH_LENGTH: usize = 256;

/// Check that a pointer is strict RFC 6901 syntax and within length.
///
/// # Errors
///
/// - `PointerError::PointerInvalid` if the pointer is non-empty but doesn't
///   start with `/`
/// - `PointerError::PointerTooLong` if it exceeds [`MAX_POINTER_LENGTH`] bytes
///
/// # Example
///
/// ```
/// use json_coerce_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();
/// validate_json_pointer("/foo/bar").unwrap();
/// validate_json_pointer("foo").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), PointerError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(PointerError::PointerInvalid);
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(PointerError::PointerTooLong);
    }
    Ok(())
}

/// Check that a parsed path is no deeper than [`MAX_PATH_LENGTH`].
pub fn validate_path(path: &[String]) -> Result<(), PointerError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PointerError::PathTooLong);
    }
    Ok(())
}
