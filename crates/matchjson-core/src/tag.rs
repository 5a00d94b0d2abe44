//! # Coarse Type Tags
//!
//! The value categories used for per-key type comparison. `null`, arrays
//! and objects share the `object` tag; integers and floats share `number`.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Coarse category of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// A JSON string.
    String,
    /// Any JSON number.
    Number,
    /// `true` or `false`.
    Boolean,
    /// An object, an array, or `null`.
    Object,
    /// No value at all.
    Undefined,
    /// Never produced from JSON; present so the tag set is closed.
    Function,
}

impl TypeTag {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Object,
        }
    }

    /// Classify a possibly missing value. `None` is `undefined`.
    pub fn of_opt(value: Option<&Value>) -> Self {
        value.map_or(Self::Undefined, Self::of)
    }

    /// The tag name as it appears in mismatch messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Undefined => "undefined",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
