//! Base validation trait and value kinds
//!
//! Copyright (c) 2025 Argproto Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Base trait for data-shape validators
///
/// A validator either returns the validated value, possibly transformed
/// (defaults filled in, a bare value wrapped in a list, ...), or fails with
/// a [`ValidationError`]. The `Display` implementation is the human
/// description of the accepted shape, used when rendering signatures.
pub trait Validate: fmt::Display + fmt::Debug + Send + Sync {
    /// Validate `data`, returning the validated value
    fn validate(&self, data: &Value) -> ValidationResult<Value>;

    /// Check `data` without keeping the validated value
    fn is_valid(&self, data: &Value) -> bool {
        self.validate(data).is_ok()
    }
}

/// Exact JSON value kinds accepted by [`crate::Schema::Type`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    /// Numbers with an exact `i64`/`u64` representation
    Integer,
    /// Numbers stored as floating point
    Float,
    /// Any number
    Number,
    String,
    List,
    Mapping,
}

impl ValueKind {
    /// Check whether `value` is of this kind
    pub fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::Null => value.is_null(),
            ValueKind::Bool => value.is_boolean(),
            ValueKind::Integer => value.is_i64() || value.is_u64(),
            ValueKind::Float => value.is_f64(),
            ValueKind::Number => value.is_number(),
            ValueKind::String => value.is_string(),
            ValueKind::List => value.is_array(),
            ValueKind::Mapping => value.is_object(),
        }
    }

    /// The kind of a concrete value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if n.is_f64() => ValueKind::Float,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Mapping,
        }
    }

    /// Validate that `value` is of this kind
    pub fn check(self, value: &Value) -> ValidationResult<Value> {
        if self.matches(value) {
            Ok(value.clone())
        } else {
            Err(type_mismatch(value, self))
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// Error for a value that is not of the expected kind
pub fn type_mismatch(value: &Value, expected: ValueKind) -> ValidationError {
    ValidationError::new(format!("{} should be instance of '{}'", value, expected))
}

/// Substitute the rendered value into an author-supplied message
///
/// Every `{}` placeholder in `template` is replaced by `value`.
pub fn format_message(template: &str, value: &Value) -> String {
    template.replace("{}", &value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind_matches() {
        assert!(ValueKind::String.matches(&json!("foo")));
        assert!(!ValueKind::String.matches(&json!(42)));
        assert!(ValueKind::Integer.matches(&json!(42)));
        assert!(ValueKind::Integer.matches(&json!(u64::MAX)));
        assert!(!ValueKind::Integer.matches(&json!(4.2)));
        assert!(ValueKind::Float.matches(&json!(4.2)));
        assert!(ValueKind::Number.matches(&json!(4.2)));
        assert!(ValueKind::Number.matches(&json!(-3)));
        assert!(!ValueKind::Integer.matches(&json!(true)));
        assert!(ValueKind::List.matches(&json!([])));
        assert!(ValueKind::Mapping.matches(&json!({})));
        assert!(ValueKind::Null.matches(&Value::Null));
    }

    #[test]
    fn test_value_kind_of() {
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!(1)), ValueKind::Integer);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Float);
        assert_eq!(ValueKind::of(&json!([1])), ValueKind::List);
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = ValueKind::String.check(&json!(42)).unwrap_err();
        assert_eq!(error.to_string(), "42 should be instance of 'string'");
    }

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("bad value {}", &json!("x")), "bad value \"x\"");
        assert_eq!(format_message("no placeholder", &json!(1)), "no placeholder");
    }
}
