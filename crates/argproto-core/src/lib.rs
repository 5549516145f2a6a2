//! Argproto Core - prototype matching for overloaded calls
//!
//! A function may accept several call shapes ("prototypes"): a fixed list of
//! positional argument types, an optional variadic tail type, and a closed
//! set of keyword arguments, some with defaults. This crate checks concrete
//! calls against those prototypes and returns the matching function together
//! with the normalized arguments.
//!
//! ## Quick Start
//!
//! ```rust
//! use argproto_core::{anything, non_empty_string, Function, Prototype, PrototypeRegistry};
//! use serde_json::{json, Map, Value};
//!
//! let single = Function::new("single", ["first_arg"], |_, _| Value::Null);
//! let many = Function::new("many", ["first_arg", "extra_args"], |_, _| Value::Null);
//!
//! // Most specific first: the first prototype that accepts the call wins
//! let registry = PrototypeRegistry::new()
//!     .with("bar", Prototype::new(single, vec![non_empty_string()]))
//!     .with("bar", Prototype::new(many, vec![non_empty_string()]).with_extra(anything()));
//!
//! let resolved = registry
//!     .resolve("bar", &[json!("foo"), json!(42), json!("baz")], &Map::new())
//!     .unwrap();
//! assert_eq!(resolved.function.name(), "many");
//! assert_eq!(resolved.args, vec![json!("foo"), json!([42, "baz"])]);
//!
//! assert!(registry.resolve("bar", &[], &Map::new()).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`validators`]: `NonEmptyString`, `Anything`, `AutoList`, `TypedList`
//! - [`prototype`]: one signature bound to a [`Function`]
//! - [`registry`]: ordered candidates per name and the resolver
//! - [`signature`]: usage strings for documentation
//! - [`batch`]: resolve many calls at once

pub mod batch;
pub mod function;
pub mod prototype;
pub mod registry;
pub mod signature;
pub mod validators;

pub use batch::{resolve_batch, BatchConfig, Call};
pub use function::{Function, FunctionBody};
pub use prototype::{Prototype, Resolved};
pub use registry::{try_prototypes, PrototypeRegistry};
pub use signature::format_prototype;
pub use validators::{
    anything, auto_list, non_empty_string, typed_list, typed_list_with_extra, Anything, AutoList,
    NonEmptyString, TypedList,
};

// Re-export the schema layer so callers need a single dependency
pub use argproto_schemas::{
    Key, MapShape, Schema, Validate, ValidationError, ValidationErrors, ValidationResult,
    ValueKind,
};
