//! Conversions from a decoded [`Value`] into requested Rust types.
//!
//! Two traits, two contracts:
//!
//! - [`FromJson`] is exact. The stored value must already be of the requested
//!   kind: a string for `String`, a boolean for `bool`, an integer that fits
//!   for the integer types, a float for `f32`/`f64`.
//! - [`Coerce`] is lenient. Numbers are widened or narrowed across integer
//!   widths, integers widen to floats, numeric strings are parsed, and booleans
//!   accept the string `"true"` and nonzero numbers.
//!
//! Neither ever panics: a value that does not convert is `None`.

use serde_json::{Map, Number, Value};

use crate::options::{BoolStrings, CoerceOptions};

/// Exact-kind conversion. No coercion is attempted.
pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Option<Self>;
}

/// Lenient conversion under a set of [`CoerceOptions`].
pub trait Coerce: Sized {
    fn coerce_with(value: &Value, opts: &CoerceOptions) -> Option<Self>;

    /// Coerce with the default options.
    fn coerce(value: &Value) -> Option<Self> {
        Self::coerce_with(value, &CoerceOptions::DEFAULT)
    }
}

/// The name of a value's dynamic kind, for diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Widen any integer-valued number to `i128`, which holds both `i64` and
/// `u64` without loss. Floats only pass with `floats_to_ints` and when they
/// have no fractional part.
fn number_to_i128(n: &Number, opts: &CoerceOptions) -> Option<(i128, bool)> {
    if let Some(i) = n.as_i64() {
        return Some((i as i128, false));
    }
    if let Some(u) = n.as_u64() {
        return Some((u as i128, false));
    }
    if !opts.floats_to_ints {
        return None;
    }
    let f = n.as_f64()?;
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    // Outside i128 a float cannot name a target integer anyway.
    if f < i128::MIN as f64 || f >= i128::MAX as f64 {
        return None;
    }
    Some((f as i128, true))
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {$(
        impl FromJson for $t {
            fn from_json(value: &Value) -> Option<Self> {
                let Value::Number(n) = value else {
                    return None;
                };
                if let Some(i) = n.as_i64() {
                    return <$t>::try_from(i).ok();
                }
                n.as_u64().and_then(|u| <$t>::try_from(u).ok())
            }
        }

        impl Coerce for $t {
            fn coerce_with(value: &Value, opts: &CoerceOptions) -> Option<Self> {
                match value {
                    Value::Number(n) => {
                        let (wide, from_float) = number_to_i128(n, opts)?;
                        // Floats are always range checked; truncating a
                        // rounded float has no meaningful result.
                        if opts.checked_narrowing || from_float {
                            <$t>::try_from(wide).ok()
                        } else {
                            Some(wide as $t)
                        }
                    }
                    Value::String(s) if opts.numeric_strings => s.parse::<$t>().ok(),
                    _ => None,
                }
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromJson for f64 {
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) if n.is_f64() => n.as_f64(),
            _ => None,
        }
    }
}

impl Coerce for f64 {
    fn coerce_with(value: &Value, opts: &CoerceOptions) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) if opts.numeric_strings => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromJson for f32 {
    fn from_json(value: &Value) -> Option<Self> {
        f64::from_json(value).map(|f| f as f32)
    }
}

impl Coerce for f32 {
    fn coerce_with(value: &Value, opts: &CoerceOptions) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(|f| f as f32),
            Value::String(s) if opts.numeric_strings => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Coerce for bool {
    fn coerce_with(value: &Value, opts: &CoerceOptions) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) => {
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if opts.bool_strings == BoolStrings::TrueOrFalse
                    && s.eq_ignore_ascii_case("false")
                {
                    Some(false)
                } else {
                    None
                }
            }
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(i != 0)
                } else if let Some(u) = n.as_u64() {
                    Some(u != 0)
                } else {
                    n.as_f64().map(|f| f != 0.0)
                }
            }
            _ => None,
        }
    }
}

impl FromJson for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl Coerce for String {
    fn coerce_with(value: &Value, _opts: &CoerceOptions) -> Option<Self> {
        Self::from_json(value)
    }
}

impl FromJson for Value {
    fn from_json(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl Coerce for Value {
    fn coerce_with(value: &Value, _opts: &CoerceOptions) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromJson for Map<String, Value> {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl Coerce for Map<String, Value> {
    fn coerce_with(value: &Value, _opts: &CoerceOptions) -> Option<Self> {
        Self::from_json(value)
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_json).collect()
    }
}

impl<T: Coerce> Coerce for Vec<T> {
    fn coerce_with(value: &Value, opts: &CoerceOptions) -> Option<Self> {
        value
            .as_array()?
            .iter()
            .map(|item| T::coerce_with(item, opts))
            .collect()
    }
}

/// `null` converts to `Some(None)`; anything else must convert to `T`.
impl<T: FromJson> FromJson for Option<T> {
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_json(other).map(Some),
        }
    }
}

impl<T: Coerce> Coerce for Option<T> {
    fn coerce_with(value: &Value, opts: &CoerceOptions) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::coerce_with(other, opts).map(Some),
        }
    }
}
