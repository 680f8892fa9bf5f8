//! Logic behind the `json-get` binary.
//!
//! `json-get` reads a document, picks one slot out of it and prints the value
//! coerced to a requested type.

use serde_json::Value;
use std::str::FromStr;

use crate::access::{PathAccess, TypedAccess};
use crate::codec;
use crate::coerce::Coerce;
use crate::error::JsonError;
use crate::options::CoerceOptions;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(JsonError),
    Usage(String),
    UnknownType(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)        => write!(f, "{e}"),
            CliError::Usage(e)       => write!(f, "{e}"),
            CliError::UnknownType(e) => write!(f, "Unknown type: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<JsonError> for CliError {
    fn from(e: JsonError) -> Self { CliError::Json(e) }
}

// ── Arguments ─────────────────────────────────────────────────────────────

/// The type a selected value is coerced to before printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetType {
    Int,
    Float,
    Bool,
    String,
    #[default]
    Json,
}

impl FromStr for TargetType {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "integer" => Ok(TargetType::Int),
            "float" | "double" | "number" => Ok(TargetType::Float),
            "bool" | "boolean" => Ok(TargetType::Bool),
            "string" | "str" => Ok(TargetType::String),
            "json" | "any" => Ok(TargetType::Json),
            other => Err(CliError::UnknownType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub selector: String,
    pub target: TargetType,
    pub options: CoerceOptions,
}

/// Parse `<selector> [--type T] [--options JSON]`, program name excluded.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, CliError> {
    let mut selector = None;
    let mut target = TargetType::default();
    let mut options = CoerceOptions::default();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--type" | "-t" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--type needs a value".into()))?;
                target = value.parse()?;
            }
            "--options" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--options needs a value".into()))?;
                options = CoerceOptions::from_json_str(&value)?;
            }
            _ if selector.is_none() => selector = Some(arg),
            _ => return Err(CliError::Usage(format!("unexpected argument: {arg}"))),
        }
    }

    let selector = selector.ok_or_else(|| {
        CliError::Usage("First argument must be a key, an index or a JSON Pointer.".into())
    })?;
    Ok(Args { selector, target, options })
}

// ── json-get ──────────────────────────────────────────────────────────────

/// Select a slot in `doc`.
///
/// A selector starting with `/` (or empty) is a JSON Pointer. Otherwise it is
/// an index when the document is an array, and a member name when not.
fn select<'a>(doc: &'a Value, selector: &str) -> Option<&'a Value> {
    if selector.is_empty() || selector.starts_with('/') {
        return doc.lookup_path(selector);
    }
    match doc {
        Value::Array(items) => items.lookup(json_coerce_pointer::parse_index(selector)?),
        _ => doc.lookup(selector),
    }
}

fn render<T: ToString>(value: Option<T>, selector: &str) -> Result<String, CliError> {
    value
        .map(|v| v.to_string())
        .ok_or_else(|| JsonError::missing(selector).into())
}

/// Decode `json`, select `args.selector` and render it as `args.target`.
pub fn lookup(json: &str, args: &Args) -> Result<String, CliError> {
    let doc = codec::try_decode(json)?;
    let slot = select(&doc, &args.selector);
    let opts = &args.options;
    let selector = args.selector.as_str();

    match args.target {
        TargetType::Int => render(slot.and_then(|v| i64::coerce_with(v, opts)), selector),
        TargetType::Float => render(slot.and_then(|v| f64::coerce_with(v, opts)), selector),
        TargetType::Bool => render(slot.and_then(|v| bool::coerce_with(v, opts)), selector),
        TargetType::String => render(slot.and_then(|v| String::coerce_with(v, opts)), selector),
        TargetType::Json => {
            let text = codec::encode_string(slot);
            render(text, selector)
        }
    }
}
