//! Core data models for templates

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A loaded template file with its placeholder inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Identifier derived from the file name (`README.md.tpl` -> `README.md`)
    pub id: String,
    /// Template content with placeholders
    pub content: String,
    /// Path the template was loaded from
    pub source: PathBuf,
    /// Distinct placeholder names present in the content, both syntaxes
    pub placeholders: BTreeSet<String>,
}
