//! Error types and handling for the CLI

use argproto_schemas::{ValidationError, ValidationErrors};
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No prototype accepted the call
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Some calls of a batch were rejected
    #[error("{0}")]
    Batch(#[from] ValidationErrors),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Invalid file format
    #[error("Invalid file format for {}: expected {}", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination or value
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// Function name not registered
    #[error("Function '{}' not found", name)]
    FunctionNotFound { name: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Anything else, with context
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Validation(_) => 2,
            Self::Batch(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::InvalidFormat { .. } => 4,
            Self::Config(_) => 5,
            Self::InvalidArgs(_) => 6,
            Self::FunctionNotFound { .. } => 7,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::TomlDe(_) | Self::TomlSer(_) => 14,
            Self::Other(_) => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_) | Self::FunctionNotFound { .. })
    }
}

/// Format an error for display to the user
///
/// Rejections only get a headline: their diagnostic has already been
/// written to stdout by the handler.
pub fn format_error(error: &Error, use_color: bool) -> String {
    let (headline, detail) = match error {
        Error::Validation(_) => ("Call rejected", None),
        Error::Batch(errors) => ("Batch rejected:", Some(format!("{} call(s) failed", errors.len()))),
        _ => ("Error:", Some(error.to_string())),
    };

    let headline = if use_color {
        use colored::Colorize;
        headline.red().bold().to_string()
    } else {
        headline.to_string()
    };

    match detail {
        Some(detail) => format!("{} {}", headline, detail),
        None => headline,
    }
}
