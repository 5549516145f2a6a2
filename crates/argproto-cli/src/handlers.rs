//! Command handlers for CLI subcommands
//!
//! Each submodule implements one subcommand. Helpers shared between them
//! live here.

mod batch;
mod check;
mod completions;
mod config;
mod signatures;

pub use batch::handle_batch;
pub use check::handle_check;
pub use completions::handle_completions;
pub use config::handle_config;
pub use signatures::handle_signatures;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Parse a command-line JSON value, naming the flag it came from on failure
fn parse_json_flag<T: DeserializeOwned>(flag: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw)
        .map_err(|e| Error::invalid_args(format!("{} must be valid JSON: {}", flag, e)))
}

/// Read a JSON or YAML document, choosing the parser from the extension
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: format!("YAML ({})", e),
        })
    } else {
        serde_json::from_str(&content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: format!("JSON ({})", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[test]
    fn test_parse_json_flag() {
        let args: Vec<Value> = parse_json_flag("--args", r#"["foo", 42]"#).unwrap();
        assert_eq!(args, vec![json!("foo"), json!(42)]);

        let err = parse_json_flag::<Vec<Value>>("--args", "{").unwrap_err();
        assert!(matches!(err, Error::InvalidArgs(message) if message.starts_with("--args")));
    }

    #[test]
    fn test_read_document_by_extension() {
        let dir = TempDir::new().unwrap();

        let yaml = dir.path().join("calls.yaml");
        std::fs::write(&yaml, "- name: foo\n").unwrap();
        let value: Value = read_document(&yaml).unwrap();
        assert_eq!(value, json!([{"name": "foo"}]));

        let json_path = dir.path().join("calls.json");
        std::fs::write(&json_path, "not json").unwrap();
        assert!(matches!(
            read_document::<Value>(&json_path),
            Err(Error::InvalidFormat { .. })
        ));

        assert!(matches!(
            read_document::<Value>(&dir.path().join("missing.json")),
            Err(Error::FileNotFound { .. })
        ));
    }
}
