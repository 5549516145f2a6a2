//! Batch resolution of many calls against one registry

use crate::prototype::Resolved;
use crate::registry::PrototypeRegistry;
use argproto_schemas::ValidationErrors;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

/// A call to resolve: function name with raw arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Value>,
    #[serde(default)]
    pub kwargs: Map<String, Value>,
}

impl Call {
    /// Call without arguments
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            kwargs: Map::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.args = args;
        self
    }

    pub fn with_kwarg<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }
}

/// Batch resolution configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Whether to stop on first error or collect all errors
    pub fail_fast: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl BatchConfig {
    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Resolve every call, returning the resolved calls in order
///
/// Failures are collected according to `config`; each one is prefixed with
/// the position and name of the failing call.
pub fn resolve_batch(
    registry: &PrototypeRegistry,
    calls: &[Call],
    config: &BatchConfig,
) -> Result<Vec<Resolved>, ValidationErrors> {
    let mut resolved = Vec::with_capacity(calls.len());
    let mut errors = ValidationErrors::new();

    for (i, call) in calls.iter().enumerate() {
        match registry.resolve(&call.name, &call.args, &call.kwargs) {
            Ok(result) => resolved.push(result),
            Err(error) => {
                debug!(call = i, function = %call.name, "Call rejected");
                errors.add(error.wrap(Some(format!("Call #{} to '{}' failed:", i, call.name)), None));

                if config.fail_fast {
                    break;
                }

                if config.max_errors > 0 && errors.len() >= config.max_errors {
                    break;
                }
            }
        }
    }

    info!(
        calls = calls.len(),
        resolved = resolved.len(),
        failed = errors.len(),
        "Batch resolution finished"
    );
    errors.into_result().map(|()| resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Function;
    use crate::prototype::Prototype;
    use crate::validators::non_empty_string;
    use serde_json::json;

    fn registry() -> PrototypeRegistry {
        let f = Function::new("f", ["name"], |args, _| args[0].clone());
        PrototypeRegistry::new().with("f", Prototype::new(f, vec![non_empty_string()]))
    }

    fn calls() -> Vec<Call> {
        vec![
            Call::new("f").with_args(vec![json!("a")]),
            Call::new("f"),
            Call::new("g"),
            Call::new("f").with_args(vec![json!("")]),
        ]
    }

    #[test]
    fn test_all_valid() {
        let calls = vec![
            Call::new("f").with_args(vec![json!("a")]),
            Call::new("f").with_args(vec![json!("b")]),
        ];
        let resolved = resolve_batch(&registry(), &calls, &BatchConfig::default()).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[1].invoke(), json!("b"));
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = resolve_batch(&registry(), &calls(), &BatchConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.errors[0].autos()[0].as_deref(), Some("Call #1 to 'f' failed:"));
        assert!(errors.errors[1].to_string().contains("Unknown function 'g'"));
    }

    #[test]
    fn test_fail_fast() {
        let config = BatchConfig::default().with_fail_fast();
        let errors = resolve_batch(&registry(), &calls(), &config).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_max_errors() {
        let config = BatchConfig::default().with_max_errors(2);
        let errors = resolve_batch(&registry(), &calls(), &config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_call_deserializes_with_defaults() {
        let call: Call = serde_json::from_value(json!({"name": "f"})).unwrap();
        assert_eq!(call, Call::new("f"));

        let call: Call =
            serde_json::from_value(json!({"name": "f", "kwargs": {"k": 1}})).unwrap();
        assert_eq!(call, Call::new("f").with_kwarg("k", 1));
    }
}
