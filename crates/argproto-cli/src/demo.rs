//! Built-in demo functions the CLI resolves calls against

use argproto_core::{
    anything, auto_list, non_empty_string, Function, Prototype, PrototypeRegistry,
};
use serde_json::{json, Value};

fn first(args: &[Value]) -> Value {
    args.first().cloned().unwrap_or(Value::Null)
}

/// Registry of `foo`, `bar`, `baz`, `foobar` and `barfoo`
///
/// Catch-all prototypes are registered after the more specific ones.
pub fn registry() -> PrototypeRegistry {
    let mut registry = PrototypeRegistry::new();

    registry.register(
        "foo",
        Prototype::new(
            Function::new("foo_no_args_no_kwargs", Vec::<String>::new(), |_, _| Value::Null),
            Vec::new(),
        ),
    );

    registry
        .register(
            "bar",
            Prototype::new(
                Function::new("bar_no_args_no_kwargs", Vec::<String>::new(), |_, _| Value::Null),
                Vec::new(),
            ),
        )
        .register(
            "bar",
            Prototype::new(
                Function::new("bar_single_arg_no_kwargs", ["first_arg"], |args, _| first(args)),
                vec![non_empty_string()],
            ),
        )
        .register(
            "bar",
            Prototype::new(
                Function::new(
                    "bar_single_arg_multiple_extra_args_no_kwargs",
                    ["first_arg", "extra_arg_list"],
                    |args, _| {
                        let extra = args.get(1).cloned().unwrap_or_else(|| json!([]));
                        json!({"first_arg": first(args), "extra_arg_list": extra})
                    },
                ),
                vec![non_empty_string()],
            )
            .with_extra(anything()),
        );

    registry.register(
        "baz",
        Prototype::new(
            Function::new("baz_no_args_required_kwarg1", ["kwarg1"], |_, kwargs| {
                kwargs.get("kwarg1").cloned().unwrap_or(Value::Null)
            }),
            Vec::new(),
        )
        .keyword("kwarg1", non_empty_string()),
    );

    registry.register(
        "foobar",
        Prototype::new(
            Function::new("foobar_no_args_optional_kwarg1", ["kwarg1"], |_, kwargs| {
                kwargs.get("kwarg1").cloned().unwrap_or(Value::Null)
            }),
            Vec::new(),
        )
        .optional_keyword_with_default("kwarg1", "foo", non_empty_string()),
    );

    registry.register(
        "barfoo",
        Prototype::new(
            Function::new("barfoo_autolist_arg", ["arglist"], |args, _| first(args)),
            vec![auto_list(non_empty_string())],
        ),
    );

    registry
}
