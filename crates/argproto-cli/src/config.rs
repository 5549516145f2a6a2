//! Configuration management for the CLI
//!
//! Configuration is read from one file, either given explicitly or the
//! first existing default location. Missing sections and fields fall back
//! to their defaults. The file format follows the extension: `.toml`,
//! `.yaml`/`.yml` or `.json`.

use crate::error::{Error, Result};
use argproto_core::BatchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name written by `config init` when no path is given
pub const DEFAULT_CONFIG_FILE: &str = ".argproto.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Batch resolution settings
    pub batch: BatchConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, json-pretty, yaml)
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: "compact".to_string(),
        }
    }
}

/// A default config file that exists but could not be loaded
///
/// Loading happens before logging is installed, so these are handed back
/// to the caller to report.
#[derive(Debug)]
pub struct SkippedConfig {
    pub path: PathBuf,
    pub error: Error,
}

/// Serialization format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let format = FileFormat::of(path).ok_or_else(|| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "a .toml, .yaml, .yml or .json file".to_string(),
        })?;
        let content = std::fs::read_to_string(path)?;

        let config = match format {
            FileFormat::Toml => toml::from_str(&content)?,
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };

        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> (Self, Vec<SkippedConfig>) {
        Self::load_first(&Self::default_config_paths())
    }

    /// Load the first of `paths` that exists and parses
    ///
    /// Existing files that fail to load are skipped and returned alongside
    /// the configuration. Defaults are used when nothing loads.
    pub fn load_first(paths: &[PathBuf]) -> (Self, Vec<SkippedConfig>) {
        let mut skipped = Vec::new();

        for path in paths {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return (config, skipped),
                    Err(error) => skipped.push(SkippedConfig {
                        path: path.clone(),
                        error,
                    }),
                }
            }
        }

        (Self::default(), skipped)
    }

    /// Load configuration from a specific file or default locations
    ///
    /// An explicit file must load; default locations are skipped over.
    pub fn load_with_file(file: Option<&Path>) -> Result<(Self, Vec<SkippedConfig>)> {
        match file {
            Some(path) => Ok((Self::from_file(path)?, Vec::new())),
            None => Ok(Self::load()),
        }
    }

    /// Default configuration file paths, in lookup order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        for stem in [".argproto", "argproto"] {
            for ext in ["toml", "yaml", "json"] {
                paths.push(PathBuf::from(format!("{}.{}", stem, ext)));
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let argproto_dir = config_dir.join("argproto");
            for ext in ["toml", "yaml", "json"] {
                paths.push(argproto_dir.join(format!("config.{}", ext)));
            }
        }

        paths
    }

    /// Serialize in the format matching the extension of `path`
    pub fn to_string_for(&self, path: &Path) -> Result<String> {
        match FileFormat::of(path).unwrap_or(FileFormat::Toml) {
            FileFormat::Toml => Ok(toml::to_string_pretty(self)?),
            FileFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            FileFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_string_for(path)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
