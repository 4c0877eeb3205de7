#![warn(missing_docs)]

//! Template engine for project scaffolding
//!
//! Provides placeholder substitution over plain-text templates with two
//! concurrent placeholder syntaxes (`$NAME` and `{{NAME}}`), a process-wide
//! default table for fallback values, and reporting of placeholders that
//! could not be resolved. Also provides loading of `.tpl` template files
//! from the filesystem.

pub mod defaults;
pub mod error;
pub mod loader;
pub mod models;
pub mod renderer;
pub mod scanner;

// Re-export public API
pub use defaults::DefaultTable;
pub use error::TemplateError;
pub use loader::TemplateLoader;
pub use models::Template;
pub use renderer::{RenderContext, RenderResult, TemplateRenderer};
pub use scanner::{PlaceholderForm, PlaceholderOccurrence};
