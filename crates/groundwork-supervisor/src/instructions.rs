//! Corrective instructions derived from supervision findings
//!
//! Turns each issue into an actionable instruction record: a title, a
//! priority, and concrete steps a maintainer (or an automated fixer) can
//! follow.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{IssueKind, IssueSeverity, ProjectIssue, SupervisionReport};

/// One actionable remediation derived from a single issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectiveInstruction {
    /// Short imperative title
    pub title: String,
    /// Priority inherited from the issue's severity
    pub priority: IssueSeverity,
    /// What the problem is
    pub description: String,
    /// Concrete steps, in order
    pub actions: Vec<String>,
    /// File or directory the instruction targets
    pub file_path: Option<PathBuf>,
}

/// Generate corrective instructions for every issue in a report, most
/// urgent first.
pub fn generate_instructions(report: &SupervisionReport) -> Vec<CorrectiveInstruction> {
    let mut instructions: Vec<CorrectiveInstruction> =
        report.issues.iter().map(instruction_for).collect();
    instructions.sort_by(|a, b| b.priority.cmp(&a.priority));
    instructions
}

fn instruction_for(issue: &ProjectIssue) -> CorrectiveInstruction {
    let (title, actions) = match issue.kind {
        IssueKind::MissingDirectory => (
            "Create missing project directory".to_string(),
            vec![
                "Create the directory listed below".to_string(),
                "Add a short README if its purpose is not obvious".to_string(),
            ],
        ),
        IssueKind::MisplacedFile => (
            "Move files to their conventional location".to_string(),
            vec![
                "Move the listed files to the suggested directory".to_string(),
                "Update any imports that referenced the old location".to_string(),
            ],
        ),
        IssueKind::DuplicateFile => (
            "Remove duplicated file".to_string(),
            vec![
                "Compare the duplicate with its original".to_string(),
                "Delete the copy or merge the differences".to_string(),
            ],
        ),
        IssueKind::DuplicateFunction => (
            "Review duplicated function".to_string(),
            vec![
                "Check whether both definitions are intentional".to_string(),
                "Extract shared behavior or rename one of them".to_string(),
            ],
        ),
        IssueKind::MissingTestsDir => (
            "Create the tests directory".to_string(),
            vec![
                "Create tests/".to_string(),
                "Add tests/__init__.py".to_string(),
                "Add an initial test_*.py file".to_string(),
            ],
        ),
        IssueKind::MissingTestInit => (
            "Add tests/__init__.py".to_string(),
            vec!["Create an empty __init__.py inside tests/".to_string()],
        ),
        IssueKind::NoTestFiles => (
            "Add initial test files".to_string(),
            vec![
                "Create one test file per module under test".to_string(),
                "Name them test_<module>.py".to_string(),
            ],
        ),
        IssueKind::InconsistentTestNaming => (
            "Normalize test file names".to_string(),
            vec!["Rename the listed files to test_*.py or *_test.py".to_string()],
        ),
        IssueKind::DuplicateTestFunction => (
            "Unify duplicated test functions".to_string(),
            vec![
                "Keep one definition of the test".to_string(),
                "Move shared setup into a fixture".to_string(),
            ],
        ),
        IssueKind::EmptyTestFunction => (
            "Implement or remove empty test".to_string(),
            vec![
                "Write assertions for the behavior under test".to_string(),
                "Delete the function if it is obsolete".to_string(),
            ],
        ),
        IssueKind::MissingTestImports => (
            "Import a test framework".to_string(),
            vec!["Add `import pytest` (or `import unittest`) to the listed file".to_string()],
        ),
    };

    CorrectiveInstruction {
        title,
        priority: issue.severity,
        description: issue.description.clone(),
        actions,
        file_path: issue.file_path.clone(),
    }
}
