//! Runtime kinds of JSON values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// VALUE KIND
// ============================================================================

/// The six runtime kinds a [`Value`] can have.
///
/// Kind descriptors are how rules talk about types: the `isa` built-in test
/// matches a value's kind against descriptor names supplied in its argument
/// list, and [`EvalError`](crate::foundation::EvalError) uses kinds to
/// describe input a test refuses to handle.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verdict::foundation::ValueKind;
///
/// assert_eq!(ValueKind::of(&json!([1, 2])), ValueKind::Array);
/// assert_eq!("Boolean".parse::<ValueKind>(), Ok(ValueKind::Bool));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// Any JSON number.
    Number,
    /// A string.
    String,
    /// An ordered list.
    Array,
    /// A keyed map.
    Object,
}

impl ValueKind {
    /// Returns the kind of `value`.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Canonical lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a kind descriptor names no known kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value kind `{0}`")]
pub struct ParseKindError(pub String);

impl FromStr for ValueKind {
    type Err = ParseKindError;

    /// Parses a case-insensitive kind descriptor.
    ///
    /// `"bool"` and `"boolean"` are both accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "null" => Ok(Self::Null),
            "bool" | "boolean" => Ok(Self::Bool),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}
