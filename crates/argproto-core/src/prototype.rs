//! Prototypes: one candidate signature bound to a function
//!
//! Copyright (c) 2025 Argproto Team
//! Licensed under the Apache-2.0 license

use crate::function::Function;
use crate::signature;
use crate::validators::TypedList;
use argproto_schemas::{MapShape, Schema, ValidationResult};
use serde_json::{Map, Value};

/// A matched call: the target function with normalized arguments
///
/// The function has not been invoked; call [`Resolved::invoke`] to do so.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub function: Function,
    pub args: Vec<Value>,
    pub kwargs: Map<String, Value>,
}

impl Resolved {
    /// Call the function with the normalized arguments
    pub fn invoke(&self) -> Value {
        self.function.call(&self.args, &self.kwargs)
    }

    pub fn into_parts(self) -> (Function, Vec<Value>, Map<String, Value>) {
        (self.function, self.args, self.kwargs)
    }
}

/// One accepted call shape of a function
///
/// Positional arguments are checked by a [`TypedList`]: a fixed prefix plus
/// an optional variadic tail. Keyword arguments are checked by a closed
/// [`MapShape`]. Built once, then only read.
#[derive(Debug, Clone)]
pub struct Prototype {
    function: Function,
    positional: TypedList,
    keywords: MapShape,
}

impl Prototype {
    /// Prototype taking exactly the given positional arguments and no keywords
    pub fn new(function: Function, positional: Vec<Schema>) -> Self {
        Self {
            function,
            positional: TypedList::new(positional),
            keywords: MapShape::new(),
        }
    }

    /// Accept any number of extra positional arguments matching `extra`
    ///
    /// They are passed to the function as a single trailing list argument.
    pub fn with_extra(mut self, extra: Schema) -> Self {
        self.positional = self.positional.with_extra(extra);
        self
    }

    /// Replace the keyword shape
    pub fn with_keywords(mut self, keywords: MapShape) -> Self {
        self.keywords = keywords;
        self
    }

    /// Declare a required keyword argument
    pub fn keyword<N: Into<String>>(mut self, name: N, schema: Schema) -> Self {
        self.keywords = self.keywords.required(name, schema);
        self
    }

    /// Declare an optional keyword argument without a default
    pub fn optional_keyword<N: Into<String>>(mut self, name: N, schema: Schema) -> Self {
        self.keywords = self.keywords.optional(name, schema);
        self
    }

    /// Declare an optional keyword argument filled with `default` when absent
    pub fn optional_keyword_with_default<N, V>(mut self, name: N, default: V, schema: Schema) -> Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.keywords = self.keywords.optional_with_default(name, default, schema);
        self
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn positional(&self) -> &TypedList {
        &self.positional
    }

    pub fn keywords(&self) -> &MapShape {
        &self.keywords
    }

    /// Number of fixed positional arguments
    pub fn arity(&self) -> usize {
        self.positional.arity()
    }

    /// Whether trailing positional arguments are accepted
    pub fn is_variadic(&self) -> bool {
        self.positional.extra().is_some()
    }

    /// Check a call against this prototype
    ///
    /// Positional arguments are checked first, then keywords; the first
    /// failure is returned as is. On success the variadic tail, if declared,
    /// becomes one trailing list argument (empty when no extra arguments were
    /// passed).
    pub fn validate(&self, args: &[Value], kwargs: &Map<String, Value>) -> ValidationResult<Resolved> {
        let mut args = self.positional.validate_items(args)?;
        let kwargs = self.keywords.validate_map(kwargs)?;

        if self.is_variadic() {
            let tail = args.split_off(self.arity());
            args.push(Value::Array(tail));
        }

        Ok(Resolved {
            function: self.function.clone(),
            args,
            kwargs,
        })
    }

    /// Render a usage string for this prototype under `name`
    pub fn format(&self, name: &str) -> String {
        signature::format_prototype(name, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{anything, auto_list, non_empty_string};
    use serde_json::json;

    fn noop(name: &str, params: &[&str]) -> Function {
        Function::new(name, params.iter().copied(), |_, _| Value::Null)
    }

    fn kwargs(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_zero_arity() {
        let proto = Prototype::new(noop("f", &[]), Vec::new());
        let resolved = proto.validate(&[], &Map::new()).unwrap();
        assert!(resolved.args.is_empty());
        assert!(resolved.kwargs.is_empty());
        assert_eq!(resolved.function, *proto.function());

        assert!(proto.validate(&[json!("bar")], &Map::new()).is_err());
    }

    #[test]
    fn test_variadic_tail_becomes_one_list() {
        let proto = Prototype::new(noop("f", &["first", "rest"]), vec![non_empty_string()])
            .with_extra(anything());
        let resolved = proto
            .validate(&[json!("foo"), json!(42), json!("baz")], &Map::new())
            .unwrap();
        assert_eq!(resolved.args, vec![json!("foo"), json!([42, "baz"])]);
    }

    #[test]
    fn test_variadic_tail_without_extra_arguments() {
        let proto = Prototype::new(noop("f", &["first", "rest"]), vec![non_empty_string()])
            .with_extra(anything());
        let resolved = proto.validate(&[json!("foo")], &Map::new()).unwrap();
        assert_eq!(resolved.args, vec![json!("foo"), json!([])]);
    }

    #[test]
    fn test_required_keyword() {
        let proto = Prototype::new(noop("f", &["kwarg1"]), Vec::new())
            .keyword("kwarg1", non_empty_string());
        assert!(proto.validate(&[], &kwargs(json!({"kwarg1": "foo"}))).is_ok());
        assert!(proto.validate(&[], &kwargs(json!({"kwarg1": 42}))).is_err());
        assert!(proto.validate(&[], &Map::new()).is_err());
        assert!(proto
            .validate(&[], &kwargs(json!({"kwarg1": "foo", "kwarg2": "bar"})))
            .is_err());
    }

    #[test]
    fn test_optional_keyword_default() {
        let proto = Prototype::new(noop("f", &["kwarg1"]), Vec::new())
            .optional_keyword_with_default("kwarg1", "foo", non_empty_string());
        let resolved = proto.validate(&[], &Map::new()).unwrap();
        assert_eq!(resolved.kwargs, kwargs(json!({"kwarg1": "foo"})));

        let resolved = proto.validate(&[], &kwargs(json!({"kwarg1": "bar"}))).unwrap();
        assert_eq!(resolved.kwargs, kwargs(json!({"kwarg1": "bar"})));
    }

    #[test]
    fn test_optional_keyword_without_default_stays_absent() {
        let proto = Prototype::new(noop("f", &["tag"]), Vec::new())
            .optional_keyword("tag", Schema::string());
        let resolved = proto.validate(&[], &Map::new()).unwrap();
        assert!(resolved.kwargs.is_empty());
    }

    #[test]
    fn test_positional_failure_comes_first() {
        let proto = Prototype::new(noop("f", &["a"]), vec![Schema::integer()])
            .keyword("k", Schema::string());
        let error = proto.validate(&[json!("x")], &Map::new()).unwrap_err();
        assert!(error.to_string().contains("Element 0"));
        assert!(!error.to_string().contains("Missing key"));
    }

    #[test]
    fn test_auto_list_argument() {
        let proto = Prototype::new(noop("f", &["arglist"]), vec![auto_list(non_empty_string())]);
        let resolved = proto.validate(&[json!("foo")], &Map::new()).unwrap();
        assert_eq!(resolved.args, vec![json!(["foo"])]);
    }

    #[test]
    fn test_invoke_uses_normalized_arguments() {
        let echo = Function::new("echo", ["kwarg1"], |_, kwargs| kwargs["kwarg1"].clone());
        let proto = Prototype::new(echo, Vec::new())
            .optional_keyword_with_default("kwarg1", "foo", non_empty_string());
        let resolved = proto.validate(&[], &Map::new()).unwrap();
        assert_eq!(resolved.invoke(), json!("foo"));
    }
}
