//! Error types for template loading

use thiserror::Error;

/// Errors that can occur while loading templates.
///
/// Rendering itself never fails: unresolved placeholders are reported in
/// the render result rather than raised as errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file or directory could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path did not name a loadable template file
    #[error("Not a template file: {0}")]
    NotATemplate(String),
}
