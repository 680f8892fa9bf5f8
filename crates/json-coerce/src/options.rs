//! Coercion configuration.

use serde::{Deserialize, Serialize};

use crate::error::JsonError;

/// Which strings coerce to a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoolStrings {
    /// Only `"true"` (ASCII case-insensitive) coerces, to `true`. Every other
    /// string, `"false"` included, is absent.
    #[default]
    TrueOnly,
    /// `"true"` and `"false"` (ASCII case-insensitive) both coerce.
    TrueOrFalse,
}

/// Options for the lenient accessors.
///
/// The defaults describe the stock coercion rules; see
/// [`Coerce`](crate::Coerce) for what each target type accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoerceOptions {
    /// Which strings coerce to a boolean. Default is `TrueOnly`.
    pub bool_strings: BoolStrings,
    /// Accept numbers encoded as strings, e.g. `"42"`. Default is `true`.
    pub numeric_strings: bool,
    /// Treat an integer outside the target width as absent instead of
    /// truncating it like an `as` cast. Default is `false`.
    pub checked_narrowing: bool,
    /// Accept floats with no fractional part, e.g. `3.0`, as integers.
    /// Default is `false`.
    pub floats_to_ints: bool,
}

impl CoerceOptions {
    pub const DEFAULT: CoerceOptions = CoerceOptions {
        bool_strings: BoolStrings::TrueOnly,
        numeric_strings: true,
        checked_narrowing: false,
        floats_to_ints: false,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    pub const fn bool_strings(mut self, bool_strings: BoolStrings) -> Self {
        self.bool_strings = bool_strings;
        self
    }

    pub const fn numeric_strings(mut self, enabled: bool) -> Self {
        self.numeric_strings = enabled;
        self
    }

    pub const fn checked_narrowing(mut self, enabled: bool) -> Self {
        self.checked_narrowing = enabled;
        self
    }

    pub const fn floats_to_ints(mut self, enabled: bool) -> Self {
        self.floats_to_ints = enabled;
        self
    }

    /// Load options from a JSON object. Missing fields take their defaults.
    ///
    /// ```
    /// use json_coerce::{BoolStrings, CoerceOptions};
    ///
    /// let opts = CoerceOptions::from_json_str(r#"{"bool_strings": "true_or_false"}"#).unwrap();
    /// assert_eq!(opts.bool_strings, BoolStrings::TrueOrFalse);
    /// assert!(opts.numeric_strings);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self, JsonError> {
        serde_json::from_str(text).map_err(|e| JsonError::MalformedJson(e.to_string()))
    }
}

impl Default for CoerceOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = CoerceOptions::default();
        assert_eq!(opts, CoerceOptions::DEFAULT);
        assert_eq!(opts.bool_strings, BoolStrings::TrueOnly);
        assert!(opts.numeric_strings);
        assert!(!opts.checked_narrowing);
        assert!(!opts.floats_to_ints);
    }

    #[test]
    fn test_builder() {
        let opts = CoerceOptions::new()
            .bool_strings(BoolStrings::TrueOrFalse)
            .numeric_strings(false)
            .checked_narrowing(true)
            .floats_to_ints(true);
        assert_eq!(opts.bool_strings, BoolStrings::TrueOrFalse);
        assert!(!opts.numeric_strings);
        assert!(opts.checked_narrowing);
        assert!(opts.floats_to_ints);
    }

    #[test]
    fn test_from_json_str() {
        let opts = CoerceOptions::from_json_str("{}").unwrap();
        assert_eq!(opts, CoerceOptions::DEFAULT);

        let opts =
            CoerceOptions::from_json_str(r#"{"checked_narrowing": true, "numeric_strings": false}"#)
                .unwrap();
        assert!(opts.checked_narrowing);
        assert!(!opts.numeric_strings);

        assert!(matches!(
            CoerceOptions::from_json_str(r#"{"bool_strings": "maybe"}"#),
            Err(JsonError::MalformedJson(_))
        ));
    }
}
