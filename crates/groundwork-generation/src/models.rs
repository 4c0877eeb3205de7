//! Core data models for project generation

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Options for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Preview the run without touching the filesystem
    pub dry_run: bool,
    /// Overwrite files that already exist at a destination; when false,
    /// existing files are skipped and recorded as such
    pub overwrite: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            overwrite: false,
        }
    }
}

/// What happened to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileAction {
    /// File was written to disk
    Written,
    /// File already existed and was left alone
    Skipped,
    /// Dry-run: the file would have been written
    Previewed,
}

/// Record of one generated file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrittenFile {
    /// Destination path
    pub path: PathBuf,
    /// What happened to the file
    pub action: FileAction,
    /// Placeholder names left unresolved in this file's content
    pub unresolved: BTreeSet<String>,
}

/// Summary of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Name of the generated project
    pub project_name: String,
    /// Root of the generated tree
    pub root: PathBuf,
    /// When the run happened
    pub timestamp: DateTime<Local>,
    /// Directories created (or previewed, under dry-run)
    pub created_directories: Vec<PathBuf>,
    /// Per-file outcomes
    pub files: Vec<WrittenFile>,
    /// Union of every file's unresolved placeholder names
    pub unresolved: BTreeSet<String>,
    /// Whether this was a dry-run
    pub dry_run: bool,
}

impl GenerationReport {
    /// Whether any generated file still contains unfilled placeholders.
    pub fn has_unresolved(&self) -> bool {
        !self.unresolved.is_empty()
    }

    /// Number of files actually written.
    pub fn files_written(&self) -> usize {
        self.files
            .iter()
            .filter(|file| file.action == FileAction::Written)
            .count()
    }

    /// Number of files skipped because they already existed.
    pub fn files_skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|file| file.action == FileAction::Skipped)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(files: Vec<WrittenFile>) -> GenerationReport {
        let unresolved = files
            .iter()
            .flat_map(|file| file.unresolved.iter().cloned())
            .collect();
        GenerationReport {
            project_name: "demo".to_string(),
            root: PathBuf::from("/tmp/demo"),
            timestamp: Local::now(),
            created_directories: Vec::new(),
            files,
            unresolved,
            dry_run: false,
        }
    }

    #[test]
    fn test_report_counts_actions() {
        let report = report_with(vec![
            WrittenFile {
                path: PathBuf::from("a"),
                action: FileAction::Written,
                unresolved: BTreeSet::new(),
            },
            WrittenFile {
                path: PathBuf::from("b"),
                action: FileAction::Skipped,
                unresolved: BTreeSet::new(),
            },
        ]);
        assert_eq!(report.files_written(), 1);
        assert_eq!(report.files_skipped(), 1);
        assert!(!report.has_unresolved());
    }

    #[test]
    fn test_report_aggregates_unresolved() {
        let report = report_with(vec![WrittenFile {
            path: PathBuf::from("a"),
            action: FileAction::Written,
            unresolved: BTreeSet::from(["MISSING".to_string()]),
        }]);
        assert!(report.has_unresolved());
        assert!(report.unresolved.contains("MISSING"));
    }
}
