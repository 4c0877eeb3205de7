//! Test-suite auditing
//!
//! Line-oriented heuristics over `tests/`: presence and naming of test
//! files, duplicate test functions, empty test bodies, and missing test
//! framework imports. Deliberately not AST-based; the checks only need to
//! catch the obvious scaffolding leftovers.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::models::{IssueKind, IssueSeverity, ProjectIssue};

fn test_def_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\s*)def\s+(test_[A-Za-z0-9_]*)\s*\(").expect("Invalid regex"))
}

/// Whether a file name follows the test naming convention.
fn is_test_file_name(name: &str) -> bool {
    name.ends_with(".py") && (name.starts_with("test_") || name.ends_with("_test.py"))
}

/// Audits the test suite of a generated project.
#[derive(Debug)]
pub struct TestAuditor {
    project_path: PathBuf,
}

impl TestAuditor {
    /// Create an auditor over `project_path`.
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
        }
    }

    /// Run every test-suite check.
    pub fn audit(&self) -> Vec<ProjectIssue> {
        let tests_dir = self.project_path.join("tests");
        if !tests_dir.is_dir() {
            return vec![ProjectIssue::new(
                IssueKind::MissingTestsDir,
                IssueSeverity::High,
                "tests/ directory does not exist",
            )
            .with_path(tests_dir)
            .with_suggestion("Create tests/ with an __init__.py and initial test files")];
        }

        let mut issues = Vec::new();

        if !tests_dir.join("__init__.py").exists() {
            issues.push(
                ProjectIssue::new(
                    IssueKind::MissingTestInit,
                    IssueSeverity::Medium,
                    "tests/__init__.py does not exist",
                )
                .with_path(tests_dir.join("__init__.py"))
                .with_suggestion("Create an empty __init__.py in tests/"),
            );
        }

        let python_files = python_files_in(&tests_dir);
        let (test_files, stray_files): (Vec<_>, Vec<_>) = python_files
            .iter()
            .filter(|path| file_name(path) != "__init__.py")
            .partition(|path| is_test_file_name(&file_name(path)));

        if test_files.is_empty() {
            issues.push(
                ProjectIssue::new(
                    IssueKind::NoTestFiles,
                    IssueSeverity::High,
                    "No test files found",
                )
                .with_path(tests_dir.clone())
                .with_suggestion("Create test files named test_*.py or *_test.py"),
            );
        }

        if !stray_files.is_empty() {
            let names: Vec<String> = stray_files.iter().map(|path| file_name(path)).collect();
            issues.push(
                ProjectIssue::new(
                    IssueKind::InconsistentTestNaming,
                    IssueSeverity::Medium,
                    format!("Inconsistently named test files: {}", names.join(", ")),
                )
                .with_path(tests_dir.clone())
                .with_suggestion("Rename test files to test_*.py or *_test.py"),
            );
        }

        self.audit_test_functions(&test_files, &mut issues);

        debug!("Test audit found {} issue(s)", issues.len());
        issues
    }

    /// Per-function checks: duplicates across files, empty bodies, missing
    /// framework imports.
    fn audit_test_functions(&self, test_files: &[&PathBuf], issues: &mut Vec<ProjectIssue>) {
        let mut seen_functions: HashMap<String, PathBuf> = HashMap::new();

        for path in test_files {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(error) => {
                    warn!("Failed to read {}: {}", path.display(), error);
                    continue;
                }
            };

            if !content.contains("import unittest") && !content.contains("import pytest") {
                issues.push(
                    ProjectIssue::new(
                        IssueKind::MissingTestImports,
                        IssueSeverity::Medium,
                        format!("{} imports neither unittest nor pytest", file_name(path)),
                    )
                    .with_path((*path).clone())
                    .with_suggestion("Add `import unittest` or `import pytest`"),
                );
            }

            let lines: Vec<&str> = content.lines().collect();
            for (index, line) in lines.iter().enumerate() {
                let Some(captures) = test_def_regex().captures(line) else {
                    continue;
                };
                let indent = captures[1].len();
                let name = captures[2].to_string();

                match seen_functions.get(&name) {
                    Some(original) if original != *path => {
                        issues.push(
                            ProjectIssue::new(
                                IssueKind::DuplicateTestFunction,
                                IssueSeverity::Medium,
                                format!(
                                    "Duplicate test function '{}' in {} and {}",
                                    name,
                                    original.display(),
                                    path.display()
                                ),
                            )
                            .with_path((*path).clone())
                            .with_suggestion("Merge duplicate test functions into one file"),
                        );
                    }
                    Some(_) => {}
                    None => {
                        seen_functions.insert(name.clone(), (*path).clone());
                    }
                }

                if body_is_empty(&lines[index + 1..], indent) {
                    issues.push(
                        ProjectIssue::new(
                            IssueKind::EmptyTestFunction,
                            IssueSeverity::Medium,
                            format!("Empty test function '{}' in {}", name, file_name(path)),
                        )
                        .with_path((*path).clone())
                        .with_suggestion("Implement the test or remove the empty function"),
                    );
                }
            }
        }
    }
}

/// Whether a function body (the lines after its `def`) contains nothing but
/// `pass`, docstrings, comments, and blank lines. `indent` is the `def`
/// line's indentation; the body ends at the first non-blank line indented
/// at or below it.
fn body_is_empty(following_lines: &[&str], indent: usize) -> bool {
    let mut saw_statement = false;

    for line in following_lines {
        if line.trim().is_empty() {
            continue;
        }
        let line_indent = line.len() - line.trim_start().len();
        if line_indent <= indent {
            break;
        }

        let trimmed = line.trim();
        let is_filler = trimmed == "pass"
            || trimmed.starts_with('#')
            || trimmed.starts_with("\"\"\"")
            || trimmed.ends_with("\"\"\"")
            || trimmed.starts_with("'''")
            || trimmed.ends_with("'''");
        if !is_filler {
            saw_statement = true;
            break;
        }
    }

    !saw_statement
}

fn python_files_in(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("py"))
        .collect();
    files.sort();
    files
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}
