//! Error types for supervision

use thiserror::Error;

/// Errors that can occur while supervising a project
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// Filesystem operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
