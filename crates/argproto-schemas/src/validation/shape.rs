//! Mapping shape descriptor
//!
//! Copyright (c) 2025 Argproto Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{type_mismatch, Validate, ValueKind};
use crate::validation::error::{ValidationError, ValidationResult};
use crate::validation::schema::Schema;
use serde_json::{Map, Value};
use std::fmt;

/// A declared key of a [`MapShape`]
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// Key that must be present
    Required(String),
    /// Key that may be absent; when absent and a default is declared, the
    /// default is inserted into the validated mapping
    Optional { name: String, default: Option<Value> },
}

impl Key {
    /// Name of the key
    pub fn name(&self) -> &str {
        match self {
            Key::Required(name) => name,
            Key::Optional { name, .. } => name,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Key::Required(_))
    }

    /// Default value of an optional key
    pub fn default_value(&self) -> Option<&Value> {
        match self {
            Key::Required(_) => None,
            Key::Optional { default, .. } => default.as_ref(),
        }
    }
}

/// Mapping with declared keys, each validated by its own schema
///
/// Keys not declared are rejected unless a `rest` schema is set, in which
/// case their values are validated against it.
#[derive(Debug, Clone, Default)]
pub struct MapShape {
    entries: Vec<(Key, Schema)>,
    rest: Option<Box<Schema>>,
}

impl MapShape {
    /// Create an empty shape, which only accepts the empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a required key
    pub fn required<N: Into<String>>(mut self, name: N, schema: Schema) -> Self {
        self.entries.push((Key::Required(name.into()), schema));
        self
    }

    /// Declare an optional key without a default
    pub fn optional<N: Into<String>>(mut self, name: N, schema: Schema) -> Self {
        self.entries.push((
            Key::Optional {
                name: name.into(),
                default: None,
            },
            schema,
        ));
        self
    }

    /// Declare an optional key filled with `default` when absent
    pub fn optional_with_default<N, V>(mut self, name: N, default: V, schema: Schema) -> Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.entries.push((
            Key::Optional {
                name: name.into(),
                default: Some(default.into()),
            },
            schema,
        ));
        self
    }

    /// Accept undeclared keys whose values match `schema`
    pub fn rest(mut self, schema: Schema) -> Self {
        self.rest = Some(Box::new(schema));
        self
    }

    /// Declared keys with their schemas, in declaration order
    pub fn entries(&self) -> &[(Key, Schema)] {
        &self.entries
    }

    /// Schema applied to undeclared keys, if any
    pub fn rest_schema(&self) -> Option<&Schema> {
        self.rest.as_deref()
    }

    /// Look up a declared key
    pub fn get(&self, name: &str) -> Option<&(Key, Schema)> {
        self.entries.iter().find(|(key, _)| key.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate a mapping, producing a new mapping with defaults filled in
    pub fn validate_map(&self, input: &Map<String, Value>) -> ValidationResult<Map<String, Value>> {
        let mut output = Map::new();
        let mut wrong_keys = Vec::new();

        for (name, value) in input {
            let schema = match self.get(name) {
                Some((_, schema)) => schema,
                None => match self.rest.as_deref() {
                    Some(schema) => schema,
                    None => {
                        wrong_keys.push(name.as_str());
                        continue;
                    }
                },
            };
            let validated = schema
                .validate(value)
                .map_err(|error| error.wrap(Some(format!("Key '{}' error:", name)), None))?;
            output.insert(name.clone(), validated);
        }

        let missing: Vec<&str> = self
            .entries
            .iter()
            .filter(|(key, _)| key.is_required() && !input.contains_key(key.name()))
            .map(|(key, _)| key.name())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::new(format!(
                "Missing {}: {}",
                plural("key", missing.len()),
                quote_all(&missing)
            )));
        }

        if !wrong_keys.is_empty() {
            return Err(ValidationError::new(format!(
                "Wrong {} {} in {}",
                plural("key", wrong_keys.len()),
                quote_all(&wrong_keys),
                Value::Object(input.clone())
            )));
        }

        for (key, _) in &self.entries {
            if let Some(default) = key.default_value() {
                if !output.contains_key(key.name()) {
                    output.insert(key.name().to_string(), default.clone());
                }
            }
        }

        Ok(output)
    }
}

impl Validate for MapShape {
    fn validate(&self, data: &Value) -> ValidationResult<Value> {
        let input = data
            .as_object()
            .ok_or_else(|| type_mismatch(data, ValueKind::Mapping))?;
        self.validate_map(input).map(Value::Object)
    }
}

impl fmt::Display for MapShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .entries
            .iter()
            .map(|(key, schema)| match key {
                Key::Required(name) => format!("{}: {}", name, schema),
                Key::Optional { name, .. } => format!("{}?: {}", name, schema),
            })
            .collect();
        if let Some(rest) = &self.rest {
            parts.push(format!("...: {}", rest));
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}

fn plural(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

fn quote_all(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options() -> MapShape {
        MapShape::new()
            .required("name", Schema::string())
            .optional_with_default("level", 2, Schema::integer())
            .optional("tag", Schema::string())
    }

    #[test]
    fn test_fills_defaults() {
        let out = options().validate(&json!({"name": "x"})).unwrap();
        assert_eq!(out, json!({"name": "x", "level": 2}));
    }

    #[test]
    fn test_keeps_given_optional_values() {
        let out = options()
            .validate(&json!({"name": "x", "level": 5, "tag": "t"}))
            .unwrap();
        assert_eq!(out, json!({"name": "x", "level": 5, "tag": "t"}));
    }

    #[test]
    fn test_missing_required_key() {
        let error = options().validate(&json!({})).unwrap_err();
        assert_eq!(error.to_string(), "Missing key: 'name'");
    }

    #[test]
    fn test_wrong_key() {
        let error = options()
            .validate(&json!({"name": "x", "colour": "red"}))
            .unwrap_err();
        assert!(error.to_string().starts_with("Wrong key 'colour' in"));
    }

    #[test]
    fn test_value_error_is_wrapped_with_key() {
        let error = options().validate(&json!({"name": 1})).unwrap_err();
        assert_eq!(error.autos()[0].as_deref(), Some("Key 'name' error:"));
        assert_eq!(error.depth(), 2);
    }

    #[test]
    fn test_rest_accepts_undeclared_keys() {
        let shape = MapShape::new().rest(Schema::integer());
        assert_eq!(shape.validate(&json!({"a": 1})).unwrap(), json!({"a": 1}));
        assert!(shape.validate(&json!({"a": "b"})).is_err());
    }

    #[test]
    fn test_rejects_non_mapping() {
        let error = MapShape::new().validate(&json!([1])).unwrap_err();
        assert_eq!(error.to_string(), "[1] should be instance of 'mapping'");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            options().to_string(),
            "{name: string, level?: integer, tag?: string}"
        );
    }
}
