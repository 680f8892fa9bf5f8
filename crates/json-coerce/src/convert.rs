//! Conversion between domain objects and JSON objects.

use serde_json::Value;

use crate::access::JsonObject;
use crate::codec;

/// A domain type that reads itself from, and writes itself to, a JSON object.
///
/// Implementors supply their own field list, typically reading fields with
/// [`TypedAccess`](crate::TypedAccess) and returning `None` when a required
/// field is missing or mistyped.
///
/// # Example
///
/// ```
/// use json_coerce::{JsonConvertible, JsonObject, TypedAccess};
/// use serde_json::{json, Value};
///
/// struct Person {
///     name: String,
///     age: i64,
/// }
///
/// impl JsonConvertible for Person {
///     fn from_json_object(obj: &JsonObject) -> Option<Self> {
///         Some(Person {
///             name: obj.get_as("name")?,
///             age: obj.get_as("age")?,
///         })
///     }
///
///     fn to_json_object(&self) -> Option<JsonObject> {
///         let mut obj = JsonObject::new();
///         obj.insert("name".into(), Value::from(self.name.as_str()));
///         obj.insert("age".into(), Value::from(self.age));
///         Some(obj)
///     }
/// }
///
/// let person = Person::from_json_str(r#"{"name":"Doe","age":30}"#).unwrap();
/// assert_eq!(person.name, "Doe");
/// assert_eq!(person.to_json_value(), Some(json!({"name": "Doe", "age": 30})));
/// ```
pub trait JsonConvertible: Sized {
    fn from_json_object(obj: &JsonObject) -> Option<Self>;

    fn to_json_object(&self) -> Option<JsonObject>;

    /// Build from any value; only objects can succeed.
    fn from_json_value(value: &Value) -> Option<Self> {
        Self::from_json_object(value.as_object()?)
    }

    fn from_json_slice(data: &[u8]) -> Option<Self> {
        Self::from_json_object(&codec::decode_object(data)?)
    }

    fn from_json_str(text: &str) -> Option<Self> {
        Self::from_json_slice(text.as_bytes())
    }

    fn to_json_value(&self) -> Option<Value> {
        self.to_json_object().map(Value::Object)
    }

    fn to_json_string(&self) -> Option<String> {
        codec::encode_string(Some(&self.to_json_value()?))
    }
}
