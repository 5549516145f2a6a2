//! Validation module for declarative data shapes
//!
//! The building blocks are:
//!
//! - **Value kinds**: exact JSON type checks
//! - **Schemas**: literals, predicates, lists, combinators and custom validators
//! - **Map shapes**: mappings with required, optional and defaulted keys
//! - **Errors**: structured cause chains with generated and human messages
//!
//! Copyright (c) 2025 Argproto Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;
pub mod schema;
pub mod shape;

// Re-export commonly used types
pub use base::{format_message, type_mismatch, Validate, ValueKind};
pub use error::{ValidationError, ValidationErrors, ValidationResult};
pub use schema::{validate_list, Predicate, Schema};
pub use shape::{Key, MapShape};
