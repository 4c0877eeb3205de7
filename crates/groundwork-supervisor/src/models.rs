//! Issue and report models for supervision

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// How urgent a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Cosmetic or informational
    Low,
    /// Should be fixed, nothing is broken yet
    Medium,
    /// Actively degrading the project
    High,
    /// Needs immediate intervention
    Critical,
}

/// What category of problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// An expected directory is absent
    MissingDirectory,
    /// A file sits outside its conventional location
    MisplacedFile,
    /// Two files have identical content
    DuplicateFile,
    /// The same function name is defined more than once
    DuplicateFunction,
    /// The tests directory is absent
    MissingTestsDir,
    /// `tests/__init__.py` is absent
    MissingTestInit,
    /// The tests directory holds no test files
    NoTestFiles,
    /// A test file does not follow the naming convention
    InconsistentTestNaming,
    /// The same test function name appears in more than one file
    DuplicateTestFunction,
    /// A test function has no body beyond pass/docstring
    EmptyTestFunction,
    /// A test file imports neither unittest nor pytest
    MissingTestImports,
}

/// A single problem detected in a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectIssue {
    /// Problem category
    pub kind: IssueKind,
    /// How urgent the finding is
    pub severity: IssueSeverity,
    /// Human-readable description
    pub description: String,
    /// File or directory the finding points at, when there is one
    pub file_path: Option<PathBuf>,
    /// Suggested remediation
    pub suggestion: Option<String>,
}

impl ProjectIssue {
    /// Create an issue with no path or suggestion attached.
    pub fn new(kind: IssueKind, severity: IssueSeverity, description: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            description: description.into(),
            file_path: None,
            suggestion: None,
        }
    }

    /// Attach the path the finding points at.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Attach a suggested remediation.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Outcome of one supervision pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisionReport {
    /// When the pass ran
    pub timestamp: DateTime<Local>,
    /// Everything found, in detection order
    pub issues: Vec<ProjectIssue>,
    /// Summary guidance derived from the issues
    pub recommendations: Vec<String>,
}

impl SupervisionReport {
    /// Whether the project passed with no findings.
    pub fn is_healthy(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues at the given severity.
    pub fn issues_with_severity(&self, severity: IssueSeverity) -> Vec<&ProjectIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .collect()
    }
}
