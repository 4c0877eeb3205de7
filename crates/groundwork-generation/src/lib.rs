#![warn(missing_docs)]

//! Project generation engine
//!
//! Instantiates a project directory tree from text templates: creates the
//! standard structure, copies static files, renders every template against
//! the project context, and reports which generated files still contain
//! unresolved placeholders.

pub mod error;
pub mod generator;
pub mod models;
pub mod structure;
pub mod writer;

// Re-export public API
pub use error::GenerationError;
pub use generator::ProjectGenerator;
pub use models::{FileAction, GenerationOptions, GenerationReport, WrittenFile};
pub use structure::{create_structure, PROJECT_DIRECTORIES};
pub use writer::OutputWriter;
