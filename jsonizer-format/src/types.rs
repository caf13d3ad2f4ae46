//! Value kind enumeration

use serde_json::Value;
use std::fmt;

/// Kind of the variant currently held by a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Null
    Null,
    /// Boolean value
    Bool,
    /// Numeric value (integer or float)
    Number,
    /// String value
    String,
    /// Object (string-keyed mapping)
    Object,
    /// Array (ordered sequence)
    Array,
}

impl ValueKind {
    /// Classify a payload
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
        }
    }

    /// Human-readable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
        }
    }

    /// True for objects and arrays
    pub fn is_container(&self) -> bool {
        matches!(self, ValueKind::Object | ValueKind::Array)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
