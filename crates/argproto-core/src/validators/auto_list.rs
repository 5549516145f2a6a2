use argproto_schemas::{format_message, validate_list, Schema, Validate, ValidationResult};
use serde_json::Value;
use std::fmt;

/// A single value matching `inner`, or a list of them, normalized to a list
///
/// The bare form is tried first. When both forms fail only the list-mode
/// failure is reported, so a scalar of the wrong type is described as an
/// invalid list.
#[derive(Debug, Clone)]
pub struct AutoList {
    inner: Schema,
    error: Option<String>,
}

impl AutoList {
    pub fn new(inner: Schema) -> Self {
        Self { inner, error: None }
    }

    /// Human message attached to list-mode failures; `{}` is replaced by the value
    pub fn with_error<M: Into<String>>(mut self, message: M) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Schema of the individual elements
    pub fn inner(&self) -> &Schema {
        &self.inner
    }
}

impl Validate for AutoList {
    fn validate(&self, data: &Value) -> ValidationResult<Value> {
        if let Ok(value) = self.inner.validate(data) {
            return Ok(Value::Array(vec![value]));
        }

        validate_list(&self.inner, data)
            .map(Value::Array)
            .map_err(|error| match &self.error {
                Some(template) => error.wrap(None, Some(format_message(template, data))),
                None => error,
            })
    }
}

impl fmt::Display for AutoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, optionally in a list", self.inner)
    }
}
