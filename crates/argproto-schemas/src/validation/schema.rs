//! Declarative schema descriptors
//!
//! Copyright (c) 2025 Argproto Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{format_message, type_mismatch, Validate, ValueKind};
use crate::validation::error::{ValidationError, ValidationResult};
use crate::validation::shape::MapShape;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A named boolean check over a value
#[derive(Clone)]
pub struct Predicate {
    name: String,
    check: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Predicate {
    /// Create a predicate; `name` is used in messages and descriptions
    pub fn new<N, F>(name: N, check: F) -> Self
    where
        N: Into<String>,
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Name of the predicate
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the predicate
    pub fn test(&self, value: &Value) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").field("name", &self.name).finish()
    }
}

/// Shape descriptor accepted by the validator
///
/// Descriptors compose: a mapping holds schemas for its values, a list
/// schema holds the schema of its elements, and `Custom` plugs in any
/// [`Validate`] implementation.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Exact kind check
    Type(ValueKind),
    /// Equality with a literal value
    Literal(Value),
    /// Named predicate that must evaluate to true
    Predicate(Predicate),
    /// Mapping with declared keys
    Map(MapShape),
    /// List whose every element matches the inner schema
    List(Box<Schema>),
    /// Every schema must pass; each one receives the previous result
    And(Vec<Schema>),
    /// The first passing alternative wins
    Or(Vec<Schema>),
    /// Inner schema with an author-supplied failure message
    Labeled { schema: Box<Schema>, message: String },
    /// Custom validator
    Custom(Arc<dyn Validate>),
}

impl Schema {
    pub fn string() -> Self {
        Schema::Type(ValueKind::String)
    }

    pub fn integer() -> Self {
        Schema::Type(ValueKind::Integer)
    }

    pub fn number() -> Self {
        Schema::Type(ValueKind::Number)
    }

    pub fn boolean() -> Self {
        Schema::Type(ValueKind::Bool)
    }

    pub fn literal<V: Into<Value>>(value: V) -> Self {
        Schema::Literal(value.into())
    }

    /// One of the enumerated literal values
    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Schema::Or(values.into_iter().map(Schema::literal).collect())
    }

    pub fn predicate<N, F>(name: N, check: F) -> Self
    where
        N: Into<String>,
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Schema::Predicate(Predicate::new(name, check))
    }

    pub fn list_of(inner: Schema) -> Self {
        Schema::List(Box::new(inner))
    }

    pub fn custom<V: Validate + 'static>(validator: V) -> Self {
        Schema::Custom(Arc::new(validator))
    }

    /// Attach a human message shown when this schema rejects a value
    ///
    /// `{}` in the message is replaced by the rejected value.
    pub fn labeled<M: Into<String>>(self, message: M) -> Self {
        Schema::Labeled {
            schema: Box::new(self),
            message: message.into(),
        }
    }
}

impl From<ValueKind> for Schema {
    fn from(kind: ValueKind) -> Self {
        Schema::Type(kind)
    }
}

impl From<MapShape> for Schema {
    fn from(shape: MapShape) -> Self {
        Schema::Map(shape)
    }
}

impl Validate for Schema {
    fn validate(&self, data: &Value) -> ValidationResult<Value> {
        match self {
            Schema::Type(kind) => kind.check(data),
            Schema::Literal(expected) => {
                if expected == data {
                    Ok(data.clone())
                } else {
                    Err(ValidationError::new(format!("{} does not match {}", expected, data)))
                }
            }
            Schema::Predicate(predicate) => {
                if predicate.test(data) {
                    Ok(data.clone())
                } else {
                    Err(ValidationError::new(format!(
                        "{}({}) should evaluate to True",
                        predicate.name(),
                        data
                    )))
                }
            }
            Schema::Map(shape) => shape.validate(data),
            Schema::List(inner) => validate_list(inner.as_ref(), data).map(Value::Array),
            Schema::And(schemas) => {
                let mut value = data.clone();
                for schema in schemas {
                    value = schema.validate(&value)?;
                }
                Ok(value)
            }
            Schema::Or(schemas) => {
                let mut last = None;
                for schema in schemas {
                    match schema.validate(data) {
                        Ok(value) => return Ok(value),
                        Err(error) => last = Some(error),
                    }
                }
                let header = format!("{} did not validate against {}", data, self);
                Err(match last {
                    Some(error) => error.wrap(Some(header), None),
                    None => ValidationError::new(header),
                })
            }
            Schema::Labeled { schema, message } => schema
                .validate(data)
                .map_err(|error| error.wrap(None, Some(format_message(message, data)))),
            Schema::Custom(validator) => validator.validate(data),
        }
    }
}

/// Validate every element of a list against `inner`
///
/// Stops at the first failing element; the failure is wrapped with the
/// element's index.
pub fn validate_list(inner: &dyn Validate, data: &Value) -> ValidationResult<Vec<Value>> {
    let items = data
        .as_array()
        .ok_or_else(|| type_mismatch(data, ValueKind::List))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            inner.validate(item).map_err(|error| {
                error.wrap(Some(format!("Element {} of {} is invalid:", i, data)), None)
            })
        })
        .collect()
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Type(kind) => write!(f, "{}", kind),
            Schema::Literal(value) => write!(f, "{}", value),
            Schema::Predicate(predicate) => f.write_str(predicate.name()),
            Schema::Map(shape) => write!(f, "{}", shape),
            Schema::List(inner) => write!(f, "list of {}", inner),
            Schema::And(schemas) => write!(f, "And({})", join(schemas)),
            Schema::Or(schemas) => write!(f, "Or({})", join(schemas)),
            Schema::Labeled { schema, .. } => write!(f, "{}", schema),
            Schema::Custom(validator) => write!(f, "{}", validator),
        }
    }
}

fn join(schemas: &[Schema]) -> String {
    schemas
        .iter()
        .map(|schema| schema.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
