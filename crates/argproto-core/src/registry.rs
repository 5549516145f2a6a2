//! Prototype registry and resolver
//!
//! Each function name maps to an ordered list of prototypes. Resolution
//! tries them in registration order and the first one that accepts the call
//! wins, so register the most specific prototypes first and catch-all
//! (variadic) ones last.
//!
//! Copyright (c) 2025 Argproto Team
//! Licensed under the Apache-2.0 license

use crate::prototype::{Prototype, Resolved};
use argproto_schemas::{ValidationError, ValidationResult};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Ordered mapping from function name to candidate prototypes
#[derive(Debug, Clone, Default)]
pub struct PrototypeRegistry {
    entries: Vec<(String, Vec<Prototype>)>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `prototype` to the candidates of `name`
    pub fn register<N: Into<String>>(&mut self, name: N, prototype: Prototype) -> &mut Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, prototypes)) => prototypes.push(prototype),
            None => self.entries.push((name, vec![prototype])),
        }
        self
    }

    /// Builder form of [`PrototypeRegistry::register`]
    pub fn with<N: Into<String>>(mut self, name: N, prototype: Prototype) -> Self {
        self.register(name, prototype);
        self
    }

    /// Candidates registered for `name`, in trial order
    pub fn prototypes(&self, name: &str) -> Option<&[Prototype]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, prototypes)| prototypes.as_slice())
    }

    /// Registered function names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prototypes(name).is_some()
    }

    /// Number of registered function names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a call to `name` against its registered prototypes
    pub fn resolve(
        &self,
        name: &str,
        args: &[Value],
        kwargs: &Map<String, Value>,
    ) -> ValidationResult<Resolved> {
        let candidates = self
            .prototypes(name)
            .ok_or_else(|| ValidationError::new(format!("Unknown function '{}'", name)))?;
        try_prototypes(name, candidates, args, kwargs)
    }

    /// Usage strings of every prototype of `name`
    pub fn signatures_for(&self, name: &str) -> Option<Vec<String>> {
        self.prototypes(name)
            .map(|prototypes| prototypes.iter().map(|p| p.format(name)).collect())
    }

    /// Usage strings of every registered prototype, in registration order
    pub fn signatures(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|(name, prototypes)| prototypes.iter().map(move |p| p.format(name)))
            .collect()
    }
}

/// Try `candidates` in order and return the first match
///
/// Later candidates are never tried once one accepts the call. When none
/// does, the error starts with a summary entry followed by the chains of
/// every candidate, in trial order.
pub fn try_prototypes(
    name: &str,
    candidates: &[Prototype],
    args: &[Value],
    kwargs: &Map<String, Value>,
) -> ValidationResult<Resolved> {
    let mut autos = Vec::new();
    let mut errors = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        match candidate.validate(args, kwargs) {
            Ok(resolved) => {
                debug!(
                    function = name,
                    prototype = index,
                    target = resolved.function.name(),
                    "Prototype matched"
                );
                return Ok(resolved);
            }
            Err(error) => {
                trace!(function = name, prototype = index, reason = %error, "Prototype rejected call");
                let (candidate_autos, candidate_errors) = error.into_chains();
                autos.extend(candidate_autos);
                errors.extend(candidate_errors);
            }
        }
    }

    debug!(function = name, candidates = candidates.len(), "No prototype matched");
    let summary = format!(
        "No prototype of '{}' matched the call ({} candidate{} tried)",
        name,
        candidates.len(),
        if candidates.len() == 1 { "" } else { "s" }
    );
    Err(ValidationError::from_chains(autos, errors).wrap(Some(summary), None))
}
