//! Type-coercing accessors over decoded JSON.
//!
//! `serde_json` does the parsing; this crate answers the question that comes
//! right after: "give me the `i32` under `"count"`", even when the document
//! stores it as `"42"`.
//!
//! - [`TypedAccess`] reads typed values out of objects, arrays and bare
//!   values, by key or index.
//! - [`PathAccess`] does the same through a JSON Pointer.
//! - [`Coerce`] / [`FromJson`] define what each target type accepts.
//! - [`codec`] decodes and encodes whole documents.
//! - [`JsonConvertible`] is the convention for domain objects.
//!
//! # Example
//!
//! ```
//! use json_coerce::{codec, TypedAccess};
//!
//! let obj = codec::decode_object_str(r#"{"foo":"bar","x":[10],"n":"42"}"#).unwrap();
//!
//! assert_eq!(obj.get_exact::<Vec<i64>>("x"), Some(vec![10]));
//! assert_eq!(obj.get_as::<String>("foo"), Some("bar".to_string()));
//! assert_eq!(obj.get_as::<i32>("n"), Some(42));
//! assert!(obj.require::<bool>("missing").is_err());
//! ```

pub mod access;
pub mod cli;
pub mod codec;
pub mod coerce;
pub mod convert;
pub mod error;
pub mod options;

pub use access::{JsonArray, JsonObject, PathAccess, TypedAccess};
pub use coerce::{kind_of, Coerce, FromJson};
pub use convert::JsonConvertible;
pub use error::JsonError;
pub use json_coerce_pointer::Key;
pub use options::{BoolStrings, CoerceOptions};

pub mod pointer {
    //! Re-export of the JSON Pointer primitives.
    pub use json_coerce_pointer::*;
}
