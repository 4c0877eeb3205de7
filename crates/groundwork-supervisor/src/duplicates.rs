//! Duplicate-file and duplicate-function detection
//!
//! File duplication compares SHA-256 content digests. Function duplication
//! is a naive name scan over `def` lines: same-named methods on different
//! classes will false-positive, which is why findings are low severity and
//! phrased as review suggestions.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::models::{IssueKind, IssueSeverity, ProjectIssue};

fn function_def_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\s*def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(").expect("Invalid regex")
    })
}

/// Detects duplicated files and function names in a project tree.
#[derive(Debug)]
pub struct DuplicateDetector {
    project_path: PathBuf,
}

impl DuplicateDetector {
    /// Create a detector over `project_path`.
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
        }
    }

    /// Report Python files whose content is byte-identical to an earlier
    /// file in the walk.
    pub fn find_duplicate_files(&self) -> Vec<ProjectIssue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for path in self.python_files() {
            let content = match fs::read(&path) {
                Ok(content) => content,
                Err(error) => {
                    warn!("Failed to read {}: {}", path.display(), error);
                    continue;
                }
            };
            let digest = format!("{:x}", Sha256::digest(&content));

            match seen.get(&digest) {
                Some(original) => {
                    issues.push(
                        ProjectIssue::new(
                            IssueKind::DuplicateFile,
                            IssueSeverity::Medium,
                            format!(
                                "Duplicate file: {} matches {}",
                                path.display(),
                                original.display()
                            ),
                        )
                        .with_path(path.clone())
                        .with_suggestion(format!(
                            "Check whether {} is needed or should be removed",
                            path.display()
                        )),
                    );
                }
                None => {
                    seen.insert(digest, path);
                }
            }
        }

        debug!("Duplicate file scan found {} issue(s)", issues.len());
        issues
    }

    /// Report function names defined more than once across the tree.
    ///
    /// Name-only matching: methods on different classes that share a name
    /// are reported too, so findings ask for review rather than removal.
    pub fn find_duplicate_functions(&self) -> Vec<ProjectIssue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for path in self.python_files() {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(error) => {
                    warn!("Failed to read {}: {}", path.display(), error);
                    continue;
                }
            };

            for (line_number, line) in content.lines().enumerate() {
                let Some(captures) = function_def_regex().captures(line) else {
                    continue;
                };
                let name = captures[1].to_string();

                match seen.get(&name) {
                    Some(original) => {
                        issues.push(
                            ProjectIssue::new(
                                IssueKind::DuplicateFunction,
                                IssueSeverity::Low,
                                format!(
                                    "Duplicate function '{}' (first seen in {})",
                                    name,
                                    original.display()
                                ),
                            )
                            .with_path(path.clone())
                            .with_suggestion(format!(
                                "Check whether function '{}' at line {} is needed; same-named methods on different classes are safe to keep",
                                name,
                                line_number + 1
                            )),
                        );
                    }
                    None => {
                        seen.insert(name, path.clone());
                    }
                }
            }
        }

        debug!("Duplicate function scan found {} issue(s)", issues.len());
        issues
    }

    /// All `.py` files under the project, in stable order.
    fn python_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.project_path)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("py"))
            .collect();
        files.sort();
        files
    }
}
