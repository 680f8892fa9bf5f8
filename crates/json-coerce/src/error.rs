//! Recoverable errors reported by the required accessors and the codec.

use json_coerce_pointer::{Key, PointerError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// The slot is absent or its value does not coerce to the requested type.
    /// The two cases are deliberately not told apart.
    #[error("missing data: {0}")]
    MissingData(Key),
    #[error("malformed JSON: {0}")]
    MalformedJson(String),
    #[error("unencodable value: {0}")]
    Unencodable(String),
    /// The pointer itself is unusable: no leading `/`, or too long or deep.
    #[error("invalid JSON Pointer: {0}")]
    InvalidPointer(PointerError),
}

impl JsonError {
    pub fn missing(key: impl Into<Key>) -> Self {
        JsonError::MissingData(key.into())
    }

    /// Map a failed pointer walk. A step that is absent or not an index is
    /// missing data at `pointer`; a malformed pointer is reported as such.
    pub(crate) fn from_pointer(pointer: &str, err: PointerError) -> Self {
        match err {
            PointerError::NotFound | PointerError::InvalidIndex => JsonError::missing(pointer),
            other => JsonError::InvalidPointer(other),
        }
    }

    /// The key carried by a `MissingData` error.
    pub fn key(&self) -> Option<&Key> {
        match self {
            JsonError::MissingData(key) => Some(key),
            _ => None,
        }
    }
}
