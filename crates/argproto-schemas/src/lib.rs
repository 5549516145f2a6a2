//! Argproto Schemas - declarative data-shape validation
//!
//! This crate provides the value validator that the argproto prototype
//! engine is built on. A [`Schema`] describes the accepted shape of a
//! `serde_json::Value`; validating either returns the (possibly transformed)
//! value or a [`ValidationError`] carrying the full cause chain.
//!
//! ## Features
//!
//! - **Exact kind checks**: strings, integers, floats, lists, mappings, ...
//! - **Literals and predicates**: equality and named boolean checks
//! - **Mapping shapes**: required keys, optional keys with defaults, closed
//!   or open key sets
//! - **Custom validators**: anything implementing [`Validate`]
//!
//! ## Quick Start
//!
//! ```rust
//! use argproto_schemas::{MapShape, Schema, Validate};
//! use serde_json::json;
//!
//! let shape = MapShape::new()
//!     .required("name", Schema::string())
//!     .optional_with_default("jobs", 1, Schema::integer());
//!
//! let validated = shape.validate(&json!({"name": "build"})).unwrap();
//! assert_eq!(validated, json!({"name": "build", "jobs": 1}));
//!
//! match shape.validate(&json!({"jobs": 4})) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e.to_string(), "Missing key: 'name'"),
//! }
//! ```
//!
//! Copyright (c) 2025 Argproto Team
//! Licensed under the Apache-2.0 license

pub mod validation;

// Re-export commonly used types for convenience
pub use validation::{
    format_message, type_mismatch, validate_list, Key, MapShape, Predicate, Schema, Validate,
    ValidationError, ValidationErrors, ValidationResult, ValueKind,
};
