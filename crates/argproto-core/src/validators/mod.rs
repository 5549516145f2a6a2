//! Custom validators for argument slots
//!
//! These plug into [`Schema::Custom`] and cover the concepts the schema
//! layer has no built-in descriptor for.
//!
//! Copyright (c) 2025 Argproto Team
//! Licensed under the Apache-2.0 license

mod auto_list;
mod typed_list;

pub use auto_list::AutoList;
pub use typed_list::TypedList;

use argproto_schemas::{type_mismatch, Schema, Validate, ValidationError, ValidationResult, ValueKind};
use serde_json::Value;
use std::fmt;

/// A string with at least one character
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyString;

impl Validate for NonEmptyString {
    fn validate(&self, data: &Value) -> ValidationResult<Value> {
        match data.as_str() {
            Some(s) if !s.is_empty() => Ok(data.clone()),
            Some(_) => Err(ValidationError::new(format!(
                "len({}) should evaluate to True",
                data
            ))),
            None => Err(type_mismatch(data, ValueKind::String)),
        }
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Non-empty string")
    }
}

/// Slot without any constraint; the value passes through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Anything;

impl Validate for Anything {
    fn validate(&self, data: &Value) -> ValidationResult<Value> {
        Ok(data.clone())
    }
}

impl fmt::Display for Anything {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Anything")
    }
}

/// Schema accepting non-empty strings
pub fn non_empty_string() -> Schema {
    Schema::custom(NonEmptyString)
}

/// Schema accepting any value
pub fn anything() -> Schema {
    Schema::custom(Anything)
}

/// Schema accepting a value matching `inner` or a list of such values
pub fn auto_list(inner: Schema) -> Schema {
    Schema::custom(AutoList::new(inner))
}

/// Schema for a fixed-arity list with no trailing elements
pub fn typed_list(types: Vec<Schema>) -> Schema {
    Schema::custom(TypedList::new(types))
}

/// Schema for a list of at least `types.len()` elements whose trailing
/// elements all match `extra`
pub fn typed_list_with_extra(types: Vec<Schema>, extra: Schema) -> Schema {
    Schema::custom(TypedList::new(types).with_extra(extra))
}
