//! One-shot project supervision
//!
//! Aggregates every check into a single health report and can persist the
//! report as a JSON supervision log under the project's `logs/` directory.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing::info;

use crate::duplicates::DuplicateDetector;
use crate::error::SupervisorError;
use crate::models::{IssueKind, IssueSeverity, ProjectIssue, SupervisionReport};
use crate::structure::StructureMonitor;
use crate::tests_audit::TestAuditor;

/// File name of the persisted supervision log.
pub const SUPERVISION_LOG: &str = "supervision_log.json";

/// Runs every structural check over one project tree.
#[derive(Debug)]
pub struct Supervisor {
    project_path: PathBuf,
}

impl Supervisor {
    /// Create a supervisor over `project_path`.
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
        }
    }

    /// Run all checks and build a report.
    pub fn check_project_health(&self) -> SupervisionReport {
        let structure = StructureMonitor::new(&self.project_path);
        let duplicates = DuplicateDetector::new(&self.project_path);
        let tests = TestAuditor::new(&self.project_path);

        let mut issues = Vec::new();
        issues.extend(structure.check_structure());
        issues.extend(structure.check_misplaced_files());
        issues.extend(duplicates.find_duplicate_files());
        issues.extend(duplicates.find_duplicate_functions());
        issues.extend(tests.audit());

        let recommendations = generate_recommendations(&issues);
        info!(
            "Supervision of {} found {} issue(s)",
            self.project_path.display(),
            issues.len()
        );

        SupervisionReport {
            timestamp: Local::now(),
            issues,
            recommendations,
        }
    }

    /// Persist a report as pretty-printed JSON under `logs/`, creating the
    /// directory if needed. Returns the log path.
    pub fn write_log(&self, report: &SupervisionReport) -> Result<PathBuf, SupervisorError> {
        let logs_dir = self.project_path.join("logs");
        fs::create_dir_all(&logs_dir)?;

        let path = logs_dir.join(SUPERVISION_LOG);
        let body = serde_json::to_string_pretty(report)?;
        fs::write(&path, body)?;

        Ok(path)
    }
}

/// Summary guidance derived from the collected issues.
fn generate_recommendations(issues: &[ProjectIssue]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if issues
        .iter()
        .any(|issue| issue.severity == IssueSeverity::Critical)
    {
        recommendations
            .push("Critical issues detected that need immediate attention".to_string());
    }
    if issues
        .iter()
        .any(|issue| issue.severity == IssueSeverity::High)
    {
        recommendations.push("High-priority issues detected that should be fixed".to_string());
    }
    if issues
        .iter()
        .any(|issue| issue.kind == IssueKind::MisplacedFile)
    {
        recommendations.push("Reorganize files to match the project structure".to_string());
    }
    if issues
        .iter()
        .any(|issue| issue.kind == IssueKind::DuplicateFile)
    {
        recommendations.push("Review and remove duplicated files".to_string());
    }
    if issues
        .iter()
        .any(|issue| issue.kind == IssueKind::DuplicateFunction)
    {
        recommendations.push("Refactor duplicated functions".to_string());
    }
    if issues.iter().any(|issue| {
        matches!(
            issue.kind,
            IssueKind::MissingTestsDir
                | IssueKind::NoTestFiles
                | IssueKind::EmptyTestFunction
                | IssueKind::DuplicateTestFunction
        )
    }) {
        recommendations.push("Bring the test suite up to the project conventions".to_string());
    }

    recommendations
}
