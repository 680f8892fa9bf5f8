//! Typed accessors over JSON containers.
//!
//! [`TypedAccess`] is implemented for objects (keyed by `&str`), arrays
//! (keyed by `usize`) and bare [`Value`]s (either key; a name only finds
//! members of an object, an index only finds elements of an array).
//! [`PathAccess`] does the same through a JSON Pointer.
//!
//! Every accessor folds "absent" and "present but not convertible" into the
//! same result: `None` for the `get_*` family, `JsonError::MissingData` for
//! the `require*` family.

use json_coerce_pointer::{
    find, find_by_pointer, get as get_by_path, parse_json_pointer, validate_json_pointer,
    validate_path, Key, PointerError,
};
use serde_json::{Map, Value};
use tracing::Level;

use crate::coerce::{kind_of, Coerce, FromJson};
use crate::error::JsonError;
use crate::options::CoerceOptions;

/// A decoded JSON object.
pub type JsonObject = Map<String, Value>;

/// A decoded JSON array.
pub type JsonArray = Vec<Value>;

fn note_miss<T>(key: impl FnOnce() -> Key, stored: Option<&Value>) {
    if tracing::enabled!(Level::TRACE) {
        tracing::trace!(
            key = %key(),
            target_type = std::any::type_name::<T>(),
            stored = stored.map(kind_of).unwrap_or("absent"),
            "json accessor miss"
        );
    }
}

/// Typed reads from a container addressed by `K`.
///
/// # Example
///
/// ```
/// use json_coerce::{JsonError, TypedAccess};
/// use serde_json::json;
///
/// let doc = json!({"count": "42", "ok": "TRUE", "tags": ["a", "b"]});
/// let obj = doc.as_object().unwrap();
///
/// assert_eq!(obj.get_as::<i64>("count"), Some(42));
/// assert_eq!(obj.get_exact::<i64>("count"), None);
/// assert_eq!(obj.get_as::<bool>("ok"), Some(true));
/// assert_eq!(obj.get_exact::<Vec<String>>("tags"), Some(vec!["a".into(), "b".into()]));
/// assert_eq!(obj.require::<String>("missing"), Err(JsonError::missing("missing")));
/// ```
pub trait TypedAccess<K: Copy + Into<Key>> {
    /// The raw value stored at `key`.
    fn lookup(&self, key: K) -> Option<&Value>;

    /// The value at `key` if its dynamic kind is exactly `T`.
    fn get_exact<T: FromJson>(&self, key: K) -> Option<T> {
        let stored = self.lookup(key);
        let found = stored.and_then(T::from_json);
        if found.is_none() {
            note_miss::<T>(|| key.into(), stored);
        }
        found
    }

    /// The value at `key` coerced to `T` with the default options.
    fn get_as<T: Coerce>(&self, key: K) -> Option<T> {
        self.get_as_with(key, &CoerceOptions::DEFAULT)
    }

    /// The value at `key` coerced to `T`.
    fn get_as_with<T: Coerce>(&self, key: K, opts: &CoerceOptions) -> Option<T> {
        let stored = self.lookup(key);
        let found = stored.and_then(|value| T::coerce_with(value, opts));
        if found.is_none() {
            note_miss::<T>(|| key.into(), stored);
        }
        found
    }

    /// Like [`get_exact`](Self::get_exact), failing with
    /// `JsonError::MissingData(key)`.
    fn require_exact<T: FromJson>(&self, key: K) -> Result<T, JsonError> {
        self.get_exact(key).ok_or_else(|| JsonError::missing(key))
    }

    /// Like [`get_as`](Self::get_as), failing with
    /// `JsonError::MissingData(key)`.
    fn require<T: Coerce>(&self, key: K) -> Result<T, JsonError> {
        self.require_with(key, &CoerceOptions::DEFAULT)
    }

    fn require_with<T: Coerce>(&self, key: K, opts: &CoerceOptions) -> Result<T, JsonError> {
        self.get_as_with(key, opts)
            .ok_or_else(|| JsonError::missing(key))
    }
}

impl<'k> TypedAccess<&'k str> for Map<String, Value> {
    fn lookup(&self, key: &'k str) -> Option<&Value> {
        self.get(key)
    }
}

impl TypedAccess<usize> for [Value] {
    fn lookup(&self, key: usize) -> Option<&Value> {
        self.get(key)
    }
}

impl TypedAccess<usize> for Vec<Value> {
    fn lookup(&self, key: usize) -> Option<&Value> {
        self.as_slice().get(key)
    }
}

impl<'k> TypedAccess<&'k str> for Value {
    fn lookup(&self, key: &'k str) -> Option<&Value> {
        self.as_object()?.get(key)
    }
}

impl TypedAccess<usize> for Value {
    fn lookup(&self, key: usize) -> Option<&Value> {
        self.as_array()?.get(key)
    }
}

/// Typed reads through a JSON Pointer such as `"/items/0/id"`.
///
/// The `get_path_*` family reads leniently: a pointer without its leading
/// `/` is accepted and any failure is `None`. The `require_path*` family
/// validates the pointer first, so a malformed or oversized pointer fails
/// with `JsonError::InvalidPointer` while a missing or uncoercible value
/// fails with `JsonError::MissingData` carrying the whole pointer as a
/// `Key::Name`.
///
/// The root pointer `""` addresses the whole document on a [`Value`]. A
/// bare [`JsonObject`] is not itself a `Value`, so on a map the root is
/// absent and only pointers with at least one step resolve.
///
/// ```
/// use json_coerce::{JsonError, PathAccess};
/// use serde_json::json;
///
/// let doc = json!({"items": [{"id": "7"}]});
/// assert_eq!(doc.get_path_as::<u32>("/items/0/id"), Some(7));
/// assert_eq!(doc.get_path_as::<u32>("/items/1/id"), None);
/// assert_eq!(doc.require_path::<u32>("/items/1/id"), Err(JsonError::missing("/items/1/id")));
/// assert!(matches!(doc.require_path::<u32>("items"), Err(JsonError::InvalidPointer(_))));
/// ```
pub trait PathAccess {
    /// Lenient lookup: the raw value at `pointer`, or `None`.
    fn lookup_path(&self, pointer: &str) -> Option<&Value>;

    /// Strict lookup: validates `pointer` and reports why the walk failed.
    fn find_path(&self, pointer: &str) -> Result<&Value, PointerError>;

    fn get_path_exact<T: FromJson>(&self, pointer: &str) -> Option<T> {
        let stored = self.lookup_path(pointer);
        let found = stored.and_then(T::from_json);
        if found.is_none() {
            note_miss::<T>(|| Key::from(pointer), stored);
        }
        found
    }

    fn get_path_as<T: Coerce>(&self, pointer: &str) -> Option<T> {
        self.get_path_as_with(pointer, &CoerceOptions::DEFAULT)
    }

    fn get_path_as_with<T: Coerce>(&self, pointer: &str, opts: &CoerceOptions) -> Option<T> {
        let stored = self.lookup_path(pointer);
        let found = stored.and_then(|value| T::coerce_with(value, opts));
        if found.is_none() {
            note_miss::<T>(|| Key::from(pointer), stored);
        }
        found
    }

    fn require_path_exact<T: FromJson>(&self, pointer: &str) -> Result<T, JsonError> {
        let stored = self
            .find_path(pointer)
            .map_err(|err| JsonError::from_pointer(pointer, err))?;
        T::from_json(stored).ok_or_else(|| {
            note_miss::<T>(|| Key::from(pointer), Some(stored));
            JsonError::missing(pointer)
        })
    }

    fn require_path<T: Coerce>(&self, pointer: &str) -> Result<T, JsonError> {
        self.require_path_with(pointer, &CoerceOptions::DEFAULT)
    }

    fn require_path_with<T: Coerce>(
        &self,
        pointer: &str,
        opts: &CoerceOptions,
    ) -> Result<T, JsonError> {
        let stored = self
            .find_path(pointer)
            .map_err(|err| JsonError::from_pointer(pointer, err))?;
        T::coerce_with(stored, opts).ok_or_else(|| {
            note_miss::<T>(|| Key::from(pointer), Some(stored));
            JsonError::missing(pointer)
        })
    }
}

impl PathAccess for Value {
    fn lookup_path(&self, pointer: &str) -> Option<&Value> {
        get_by_path(self, &parse_json_pointer(pointer))
    }

    fn find_path(&self, pointer: &str) -> Result<&Value, PointerError> {
        find_by_pointer(self, pointer)
    }
}

impl PathAccess for Map<String, Value> {
    fn lookup_path(&self, pointer: &str) -> Option<&Value> {
        let path = parse_json_pointer(pointer);
        let (first, rest) = path.split_first()?;
        get_by_path(self.get(first)?, rest)
    }

    fn find_path(&self, pointer: &str) -> Result<&Value, PointerError> {
        validate_json_pointer(pointer)?;
        let path = parse_json_pointer(pointer);
        validate_path(&path)?;
        let (first, rest) = path.split_first().ok_or(PointerError::NotFound)?;
        find(self.get(first).ok_or(PointerError::NotFound)?, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_coerce_pointer::{MAX_PATH_LENGTH, MAX_POINTER_LENGTH};
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_get_as_int_from_string() {
        let obj = object(json!({"k": "42", "bad": "abc"}));
        assert_eq!(obj.get_as::<i64>("k"), Some(42));
        assert_eq!(obj.get_as::<i32>("k"), Some(42));
        assert_eq!(obj.get_as::<i16>("k"), Some(42));
        assert_eq!(obj.get_as::<i64>("bad"), None);
        assert_eq!(obj.get_as::<i64>("missing"), None);
    }

    #[test]
    fn test_get_as_bool_asymmetry() {
        let obj = object(json!({"yes": "TRUE", "no": "false", "real": false}));
        assert_eq!(obj.get_as::<bool>("yes"), Some(true));
        assert_eq!(obj.get_as::<bool>("no"), None);
        assert_eq!(obj.get_as::<bool>("real"), Some(false));
    }

    #[test]
    fn test_get_exact_does_not_coerce() {
        let obj = object(json!({"n": "5", "s": 5}));
        assert_eq!(obj.get_exact::<i64>("n"), None);
        assert_eq!(obj.get_exact::<String>("s"), None);
        assert_eq!(obj.get_exact::<String>("n"), Some("5".to_string()));
        assert_eq!(obj.get_exact::<Value>("s"), Some(json!(5)));
    }

    #[test]
    fn test_require_reports_key() {
        let obj = object(json!({"s": 5}));
        assert_eq!(
            obj.require::<String>("missing"),
            Err(JsonError::MissingData(Key::Name("missing".into())))
        );
        // Wrong type reports the same error as absent
        assert_eq!(obj.require::<String>("s"), Err(JsonError::missing("s")));
        assert_eq!(obj.require_exact::<i64>("s"), Ok(5));
        assert_eq!(obj.require::<f64>("s"), Ok(5.0));
    }

    #[test]
    fn test_array_access() {
        let arr = vec![json!(5), json!(true), json!("sup")];
        assert_eq!(arr.get_as::<i64>(0), Some(5));
        assert_eq!(arr.require::<bool>(1), Ok(true));
        assert_eq!(arr.get_as::<String>(2), Some("sup".to_string()));
        assert_eq!(arr.require::<bool>(9), Err(JsonError::missing(9usize)));

        let slice: &[Value] = &arr;
        assert_eq!(slice.get_exact::<bool>(1), Some(true));
    }

    #[test]
    fn test_value_access() {
        let obj = json!({"a": "1"});
        let arr = json!(["1"]);
        assert_eq!(obj.get_as::<u8>("a"), Some(1));
        assert_eq!(arr.get_as::<u8>(0), Some(1));
        // Names do not reach into arrays, indices do not reach into objects
        assert_eq!(arr.get_as::<u8>("0"), None);
        assert_eq!(json!({"0": 1}).get_as::<u8>(0), None);
        assert_eq!(json!(3).get_as::<u8>("a"), None);
    }

    #[test]
    fn test_with_options() {
        let obj = object(json!({"b": "false", "n": 300}));
        let opts = CoerceOptions::new()
            .bool_strings(crate::options::BoolStrings::TrueOrFalse)
            .checked_narrowing(true);
        assert_eq!(obj.get_as_with::<bool>("b", &opts), Some(false));
        assert_eq!(obj.get_as_with::<u8>("n", &opts), None);
        assert_eq!(obj.get_as::<u8>("n"), Some(44));
        assert_eq!(obj.require_with::<u8>("n", &opts), Err(JsonError::missing("n")));
    }

    #[test]
    fn test_path_access() {
        let doc = json!({"a": {"b": ["x", "12"]}});
        assert_eq!(doc.get_path_as::<i32>("/a/b/1"), Some(12));
        assert_eq!(doc.get_path_exact::<String>("/a/b/0"), Some("x".into()));
        assert_eq!(doc.get_path_exact::<Value>(""), Some(doc.clone()));
        assert_eq!(
            doc.require_path::<i32>("/a/b/0"),
            Err(JsonError::missing("/a/b/0"))
        );
        assert_eq!(doc.require_path_exact::<String>("/a/b/0"), Ok("x".into()));

        let obj = object(doc);
        assert_eq!(obj.get_path_as::<i32>("/a/b/1"), Some(12));
        assert_eq!(obj.lookup_path("/zz"), None);
    }

    #[test]
    fn test_root_pointer_on_value_and_map() {
        let doc = json!({"a": 1});
        assert_eq!(doc.lookup_path(""), Some(&doc));
        assert_eq!(doc.require_path_exact::<Value>(""), Ok(doc.clone()));

        let obj = object(doc);
        assert_eq!(obj.lookup_path(""), None);
        assert_eq!(obj.find_path(""), Err(PointerError::NotFound));
        assert_eq!(obj.require_path_exact::<Value>(""), Err(JsonError::missing("")));
        assert_eq!(obj.require_path::<i64>("/a"), Ok(1));
    }

    #[test]
    fn test_require_path_rejects_bad_pointers() {
        let doc = json!({"a": {"b": [1, "2"]}});
        assert_eq!(
            doc.require_path::<i64>("a/b/0"),
            Err(JsonError::InvalidPointer(PointerError::PointerInvalid))
        );
        // The lenient lookup still reads the same pointer
        assert_eq!(doc.get_path_as::<i64>("a/b/0"), Some(1));

        let long = format!("/{}", "x".repeat(MAX_POINTER_LENGTH));
        assert_eq!(
            doc.require_path::<i64>(&long),
            Err(JsonError::InvalidPointer(PointerError::PointerTooLong))
        );
        let deep = "/a".repeat(MAX_PATH_LENGTH + 1);
        assert_eq!(
            doc.require_path::<i64>(&deep),
            Err(JsonError::InvalidPointer(PointerError::PathTooLong))
        );

        let obj = object(doc);
        assert_eq!(
            obj.require_path_exact::<Value>("a"),
            Err(JsonError::InvalidPointer(PointerError::PointerInvalid))
        );
    }

    #[test]
    fn test_require_path_missing_steps() {
        let doc = json!({"a": {"b": [1, "2"]}});
        assert_eq!(doc.require_path::<i64>("/a/b/1"), Ok(2));
        assert_eq!(doc.require_path::<i64>("/a/c"), Err(JsonError::missing("/a/c")));
        assert_eq!(doc.require_path::<i64>("/a/b/7"), Err(JsonError::missing("/a/b/7")));
        assert_eq!(doc.require_path::<i64>("/a/b/-"), Err(JsonError::missing("/a/b/-")));
        assert_eq!(doc.find_path("/a/b/-"), Err(PointerError::InvalidIndex));
        assert_eq!(doc.require_path_exact::<i64>("/a/b/1"), Err(JsonError::missing("/a/b/1")));

        let obj = object(doc);
        assert_eq!(obj.require_path::<i64>("/a/b/0/z"), Err(JsonError::missing("/a/b/0/z")));
        assert_eq!(obj.find_path("/a/b/0"), Ok(&json!(1)));
    }

    #[test]
    fn test_require_path_with_options() {
        let doc = json!({"flags": {"off": "False", "wide": 300}});
        let opts = CoerceOptions::new()
            .bool_strings(crate::options::BoolStrings::TrueOrFalse)
            .checked_narrowing(true);
        assert_eq!(doc.require_path_with::<bool>("/flags/off", &opts), Ok(false));
        assert_eq!(doc.require_path::<bool>("/flags/off"), Err(JsonError::missing("/flags/off")));
        assert_eq!(
            doc.require_path_with::<u8>("/flags/wide", &opts),
            Err(JsonError::missing("/flags/wide"))
        );
        assert_eq!(doc.require_path::<u8>("/flags/wide"), Ok(44));

        let obj = object(doc);
        assert_eq!(obj.require_path_with::<bool>("/flags/off", &opts), Ok(false));
    }
}
