//! End-to-end resolution scenarios
//!
//! A small registry of overloaded functions, resolved with the calls a
//! caller would make, including the ones that must be rejected.

use argproto_core::{
    anything, auto_list, non_empty_string, typed_list, Function, Prototype, PrototypeRegistry,
    Resolved, Schema, ValidationResult,
};
use serde_json::{json, Map, Value};

fn noop(name: &str, params: &[&str]) -> Function {
    Function::new(name, params.iter().copied(), |_, _| Value::Null)
}

/// Order matters: catch-all prototypes come last
fn registry() -> PrototypeRegistry {
    let foobar = Function::new("foobar_no_args_optional_kwarg1", ["kwarg1"], |_, kwargs| {
        kwargs.get("kwarg1").cloned().unwrap_or(Value::Null)
    });
    let barfoo = Function::new("barfoo_autolist_arg", ["arglist"], |args, _| {
        args.first().cloned().unwrap_or(Value::Null)
    });

    PrototypeRegistry::new()
        .with("foo", Prototype::new(noop("foo_no_args_no_kwargs", &[]), Vec::new()))
        .with("bar", Prototype::new(noop("bar_no_args_no_kwargs", &[]), Vec::new()))
        .with(
            "bar",
            Prototype::new(noop("bar_single_arg_no_kwargs", &["first_arg"]), vec![non_empty_string()]),
        )
        .with(
            "bar",
            Prototype::new(
                noop("bar_single_arg_multiple_extra_args_no_kwargs", &["first_arg", "extra_arg_list"]),
                vec![non_empty_string()],
            )
            .with_extra(anything()),
        )
        .with(
            "baz",
            Prototype::new(noop("baz_no_args_required_kwarg1", &["kwarg1"]), Vec::new())
                .keyword("kwarg1", non_empty_string()),
        )
        .with(
            "foobar",
            Prototype::new(foobar, Vec::new())
                .optional_keyword_with_default("kwarg1", "foo", non_empty_string()),
        )
        .with("barfoo", Prototype::new(barfoo, vec![auto_list(non_empty_string())]))
}

fn resolve(name: &str, args: Value, kwargs: Value) -> ValidationResult<Resolved> {
    let args = args.as_array().cloned().unwrap_or_default();
    let kwargs: Map<String, Value> = kwargs.as_object().cloned().unwrap_or_default();
    registry().resolve(name, &args, &kwargs)
}

#[test]
fn test_single_prototype() {
    let resolved = resolve("foo", json!([]), json!({})).unwrap();
    assert_eq!(resolved.function.name(), "foo_no_args_no_kwargs");
    assert!(resolved.args.is_empty());
    resolved.invoke();

    assert!(resolve("foo", json!(["bar"]), json!({})).is_err());
}

#[test]
fn test_multiple_prototypes() {
    let resolved = resolve("bar", json!([]), json!({})).unwrap();
    assert_eq!(resolved.function.name(), "bar_no_args_no_kwargs");

    let resolved = resolve("bar", json!(["foo"]), json!({})).unwrap();
    assert_eq!(resolved.function.name(), "bar_single_arg_no_kwargs");
    assert_eq!(resolved.args, vec![json!("foo")]);

    let resolved = resolve("bar", json!(["foo", 42, "baz"]), json!({})).unwrap();
    assert_eq!(
        resolved.function.name(),
        "bar_single_arg_multiple_extra_args_no_kwargs"
    );
    assert_eq!(resolved.args, vec![json!("foo"), json!([42, "baz"])]);
}

#[test]
fn test_required_kwarg() {
    let resolved = resolve("baz", json!([]), json!({"kwarg1": "foo"})).unwrap();
    assert_eq!(resolved.function.name(), "baz_no_args_required_kwarg1");
    assert_eq!(resolved.kwargs["kwarg1"], json!("foo"));

    assert!(resolve("baz", json!([]), json!({"kwarg1": 42})).is_err());
    assert!(resolve("baz", json!([]), json!({"kwarg1": "foo", "kwarg2": "bar"})).is_err());
    assert!(resolve("baz", json!([]), json!({})).is_err());
}

#[test]
fn test_optional_kwarg() {
    let resolved = resolve("foobar", json!([]), json!({})).unwrap();
    assert_eq!(resolved.function.name(), "foobar_no_args_optional_kwarg1");
    assert_eq!(Value::Object(resolved.kwargs.clone()), json!({"kwarg1": "foo"}));
    assert_eq!(resolved.invoke(), json!("foo"));

    let resolved = resolve("foobar", json!([]), json!({"kwarg1": "bar"})).unwrap();
    assert_eq!(resolved.invoke(), json!("bar"));
}

#[test]
fn test_autolist() {
    let resolved = resolve("barfoo", json!(["foo"]), json!({})).unwrap();
    assert_eq!(resolved.function.name(), "barfoo_autolist_arg");
    assert_eq!(resolved.invoke(), json!(["foo"]));

    let resolved = resolve("barfoo", json!([["foo", "bar"]]), json!({})).unwrap();
    assert_eq!(resolved.invoke(), json!(["foo", "bar"]));

    assert!(resolve("barfoo", json!([]), json!({})).is_err());
}

#[test]
fn test_failure_reports_every_candidate() {
    let error = resolve("bar", json!([1, 2]), json!({})).unwrap_err();
    let text = error.to_string();
    assert!(text.starts_with("No prototype of 'bar' matched the call (3 candidates tried)"));
    assert!(text.contains("should be a list of size 0"));
    assert!(text.contains("should be a list of size 1"));
    assert!(text.contains("1 should be instance of 'string'"));
}

#[test]
fn test_signatures() {
    let signatures = registry().signatures();
    assert_eq!(
        signatures,
        vec![
            "foo()".to_string(),
            "bar()".to_string(),
            "bar(<first_arg> (Non-empty string))".to_string(),
            "bar(<first_arg> (Non-empty string),\n    <extra_arg_list, ...> (Anything))".to_string(),
            "baz(kwarg1: <Non-empty string>)".to_string(),
            "foobar(kwarg1: <Non-empty string> = \"foo\")".to_string(),
            "barfoo(<arglist> (Non-empty string, optionally in a list))".to_string(),
        ]
    );
}

#[test]
fn test_nested_positional_list() {
    let pair = Function::new("pair", ["point"], |args, _| args[0].clone());
    let registry = PrototypeRegistry::new().with(
        "pair",
        Prototype::new(pair, vec![typed_list(vec![Schema::integer(), Schema::integer()])]),
    );

    let resolved = registry.resolve("pair", &[json!([1, 2])], &Map::new()).unwrap();
    assert_eq!(resolved.invoke(), json!([1, 2]));
    assert!(registry.resolve("pair", &[json!([1])], &Map::new()).is_err());
}
