//! Usage strings for prototypes
//!
//! A prototype of `bar` taking one string and any number of extra values
//! renders as:
//!
//! ```text
//! bar(<first_arg> (Non-empty string),
//!     <extra_args, ...> (Anything))
//! ```

use crate::prototype::Prototype;

/// Render `prototype` as a usage string for the function `name`
///
/// Positional parameters are named after the function's declared parameter
/// names, falling back to `arg<i>` when fewer names were declared. Keyword
/// parameters use the keyword names of the prototype.
pub fn format_prototype(name: &str, prototype: &Prototype) -> String {
    let params = prototype.function().params();
    let param_name = |i: usize| {
        params
            .get(i)
            .cloned()
            .unwrap_or_else(|| format!("arg{}", i))
    };

    let mut parts = Vec::new();

    for (i, schema) in prototype.positional().types().iter().enumerate() {
        parts.push(format!("<{}> ({})", param_name(i), schema));
    }

    if let Some(extra) = prototype.positional().extra() {
        parts.push(format!("<{}, ...> ({})", param_name(prototype.arity()), extra));
    }

    for (key, schema) in prototype.keywords().entries() {
        match key.default_value() {
            Some(default) => parts.push(format!("{}: <{}> = {}", key.name(), schema, default)),
            None => parts.push(format!("{}: <{}>", key.name(), schema)),
        }
    }

    if let Some(rest) = prototype.keywords().rest_schema() {
        parts.push(format!("...: <{}>", rest));
    }

    let separator = format!(",\n{}", " ".repeat(name.len() + 1));
    format!("{}({})", name, parts.join(&separator))
}
