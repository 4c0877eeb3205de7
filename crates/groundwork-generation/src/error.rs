//! Error types for project generation

use thiserror::Error;

/// Errors that can occur during project generation.
///
/// Unresolved placeholders are not errors: they are carried in the
/// generation report so the caller can decide how loud to be about them.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Configuration failed validation
    #[error("Invalid project configuration: {}", errors.join("; "))]
    InvalidConfig {
        /// The collected validation errors
        errors: Vec<String>,
    },

    /// Configuration loading failed
    #[error("Configuration error: {0}")]
    Config(#[from] groundwork_config::ConfigError),

    /// Template loading failed
    #[error("Template error: {0}")]
    Template(#[from] groundwork_templates::TemplateError),

    /// Filesystem operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
