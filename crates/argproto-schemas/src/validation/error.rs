//! Validation error types for data-shape schemas
//!
//! Copyright (c) 2025 Argproto Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Structured validation failure with a cause chain
///
/// The chain is kept as two parallel sequences, ordered from the outermost
/// context to the innermost cause:
/// - `autos`: generated messages describing what failed
/// - `errors`: human messages supplied by the schema author, if any
///
/// Both sequences always have the same length. Deserialized chains of
/// different lengths are padded like [`ValidationError::from_chains`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(from = "Chains")]
pub struct ValidationError {
    autos: Vec<Option<String>>,
    errors: Vec<Option<String>>,
}

/// Wire form of [`ValidationError`] before the chains are aligned
#[derive(Deserialize)]
struct Chains {
    #[serde(default)]
    autos: Vec<Option<String>>,
    #[serde(default)]
    errors: Vec<Option<String>>,
}

impl From<Chains> for ValidationError {
    fn from(chains: Chains) -> Self {
        Self::from_chains(chains.autos, chains.errors)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ValidationError {
    /// Create a validation error with a single generated message
    pub fn new<M>(auto: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            autos: vec![Some(auto.into())],
            errors: vec![None],
        }
    }

    /// Create a validation error with a generated and an optional human message
    pub fn with_error<M>(auto: M, error: Option<String>) -> Self
    where
        M: Into<String>,
    {
        Self {
            autos: vec![Some(auto.into())],
            errors: vec![error],
        }
    }

    /// Build an error from already assembled chains
    ///
    /// The shorter chain is padded with `None` so both stay aligned.
    pub fn from_chains(mut autos: Vec<Option<String>>, mut errors: Vec<Option<String>>) -> Self {
        let len = autos.len().max(errors.len());
        autos.resize(len, None);
        errors.resize(len, None);
        Self { autos, errors }
    }

    /// Generated messages, outermost first
    pub fn autos(&self) -> &[Option<String>] {
        &self.autos
    }

    /// Author-supplied messages, outermost first
    pub fn errors(&self) -> &[Option<String>] {
        &self.errors
    }

    /// Split into the generated and author-supplied chains
    pub fn into_chains(self) -> (Vec<Option<String>>, Vec<Option<String>>) {
        (self.autos, self.errors)
    }

    /// Prepend one level of context to the chain
    pub fn wrap(mut self, auto: Option<String>, error: Option<String>) -> Self {
        self.autos.insert(0, auto);
        self.errors.insert(0, error);
        self
    }

    /// Append another error's chain after this one
    pub fn extend(&mut self, other: ValidationError) {
        self.autos.extend(other.autos);
        self.errors.extend(other.errors);
    }

    /// Number of entries in the chain
    pub fn depth(&self) -> usize {
        self.autos.len()
    }

    /// Render the chain for humans
    ///
    /// Author-supplied messages win when there are any; otherwise the
    /// generated messages are used. Duplicates are dropped and the remaining
    /// messages are joined one per line.
    pub fn code(&self) -> String {
        let human: Vec<&str> = unique(&self.errors);
        if !human.is_empty() {
            return human.join("\n");
        }
        unique(&self.autos).join("\n")
    }
}

fn unique(messages: &[Option<String>]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for message in messages.iter().flatten() {
        if !seen.contains(&message.as_str()) {
            seen.push(message.as_str());
        }
    }
    seen
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Multiple validation errors collected during batch validation
#[derive(Debug, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of validation errors
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiple validation errors occurred:")?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over the collected errors
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}
