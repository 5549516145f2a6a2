use argproto_schemas::{
    format_message, Schema, Validate, ValidationError, ValidationResult,
};
use serde_json::Value;
use std::fmt;

/// Fixed-arity list with an optional homogeneous tail
///
/// Position `i` of the fixed prefix is validated against `types[i]`. Without
/// an extra type the list must have exactly `types.len()` elements; with one,
/// at least that many, and every trailing element must match the extra type.
#[derive(Debug, Clone)]
pub struct TypedList {
    types: Vec<Schema>,
    extra: Option<Schema>,
    error: Option<String>,
}

impl TypedList {
    pub fn new(types: Vec<Schema>) -> Self {
        Self {
            types,
            extra: None,
            error: None,
        }
    }

    /// Accept any number of trailing elements matching `extra`
    pub fn with_extra(mut self, extra: Schema) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Human message attached to failures; `{}` is replaced by the list
    pub fn with_error<M: Into<String>>(mut self, message: M) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn types(&self) -> &[Schema] {
        &self.types
    }

    pub fn extra(&self) -> Option<&Schema> {
        self.extra.as_ref()
    }

    /// Length of the fixed prefix
    pub fn arity(&self) -> usize {
        self.types.len()
    }

    fn accepts_len(&self, len: usize) -> bool {
        match self.extra {
            Some(_) => len >= self.types.len(),
            None => len == self.types.len(),
        }
    }

    fn size_message(&self, data: &Value) -> String {
        match self.extra {
            Some(_) => format!("{} should be a list of minimum size {}", data, self.types.len()),
            None => format!("{} should be a list of size {}", data, self.types.len()),
        }
    }

    fn human_message(&self, data: &Value) -> Option<String> {
        self.error.as_ref().map(|template| format_message(template, data))
    }

    /// Validate a slice of items, returning the validated items in order
    pub fn validate_items(&self, items: &[Value]) -> ValidationResult<Vec<Value>> {
        if !self.accepts_len(items.len()) {
            let data = Value::from(items.to_vec());
            return Err(ValidationError::with_error(
                self.size_message(&data),
                self.human_message(&data),
            ));
        }

        let (fixed, tail) = items.split_at(self.types.len());
        let tail_schemas = self.extra.iter().cycle().take(tail.len());
        let schemas = self.types.iter().chain(tail_schemas);

        let mut validated = Vec::with_capacity(items.len());
        for (i, (schema, item)) in schemas.zip(fixed.iter().chain(tail)).enumerate() {
            let value = schema.validate(item).map_err(|error| {
                let data = Value::from(items.to_vec());
                error.wrap(
                    Some(format!("Element {} of {} is invalid:", i, data)),
                    self.human_message(&data),
                )
            })?;
            validated.push(value);
        }
        Ok(validated)
    }
}

impl Validate for TypedList {
    fn validate(&self, data: &Value) -> ValidationResult<Value> {
        match data.as_array() {
            Some(items) => self.validate_items(items).map(Value::Array),
            None => Err(ValidationError::with_error(
                self.size_message(data),
                self.human_message(data),
            )),
        }
    }
}

impl fmt::Display for TypedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.types.iter().map(|t| t.to_string()).collect();
        if let Some(extra) = &self.extra {
            parts.push(format!("{}...", extra));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}
