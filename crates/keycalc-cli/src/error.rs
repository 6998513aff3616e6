//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Snapshot could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Engine rejected a key or a setting
    #[error("Calculator error: {0}")]
    Calc(#[from] keycalc::core::CalcError),

    /// Unknown key in strict mode
    #[error("Unknown key {label:?} at position {position}")]
    UnknownKey {
        /// The offending label
        label: String,
        /// 1-based position in the key sequence
        position: usize,
    },
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown-key error
    #[must_use]
    pub fn unknown_key(label: impl Into<String>, position: usize) -> Self {
        Self::UnknownKey {
            label: label.into(),
            position,
        }
    }
}
