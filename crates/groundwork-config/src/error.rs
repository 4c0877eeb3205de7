//! Error types for configuration handling

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or writing configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// File extension is not a supported configuration format
    #[error("Unsupported configuration format: {0} (supported: .json, .yaml, .yml)")]
    UnsupportedFormat(String),

    /// JSON parsing or serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
