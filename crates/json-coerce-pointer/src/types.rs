//! Key and path types.

use std::fmt;

/// A single slot in a JSON container.
///
/// Object members are addressed by name, array elements by index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// An object member name.
    Name(String),
    /// An array element index.
    Index(usize),
}

impl Key {
    /// Returns the member name, if this is a `Key::Name`.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    /// Returns the element index, if this is a `Key::Index`.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Name(_) => None,
            Key::Index(idx) => Some(*idx),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<usize> for Key {
    fn from(idx: usize) -> Self {
        Key::Index(idx)
    }
}

/// A step in a JSON Pointer path, already unescaped.
///
/// Steps stay strings until they meet a container: the same step `"0"` names
/// a member of an object and an element of an array.
pub type PathStep = String;

/// A JSON Pointer path.
pub type Path = Vec<PathStep>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        assert_eq!(Key::from("missing").to_string(), "missing");
        assert_eq!(Key::from(7).to_string(), "7");
        assert_eq!(Key::Name(String::new()).to_string(), "");
    }

    #[test]
    fn test_key_accessors() {
        let name = Key::from("foo".to_string());
        assert_eq!(name.as_name(), Some("foo"));
        assert_eq!(name.as_index(), None);

        let idx = Key::from(3usize);
        assert_eq!(idx.as_name(), None);
        assert_eq!(idx.as_index(), Some(3));
    }
}
