//! Expected-structure and misplaced-file checks

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::{IssueKind, IssueSeverity, ProjectIssue};

/// Directories a generated project is expected to keep, with their purpose.
pub const EXPECTED_DIRECTORIES: &[(&str, &str)] = &[
    ("src", "main source code"),
    ("tests", "unit tests"),
    ("docs", "documentation"),
    ("examples", "usage examples"),
    ("logs", "log files"),
];

/// Checks a project tree against the expected layout.
#[derive(Debug)]
pub struct StructureMonitor {
    project_path: PathBuf,
}

impl StructureMonitor {
    /// Create a monitor over `project_path`.
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
        }
    }

    /// Report every expected directory that is absent.
    pub fn check_structure(&self) -> Vec<ProjectIssue> {
        let mut issues = Vec::new();

        for (name, purpose) in EXPECTED_DIRECTORIES {
            let dir = self.project_path.join(name);
            if !dir.is_dir() {
                issues.push(
                    ProjectIssue::new(
                        IssueKind::MissingDirectory,
                        IssueSeverity::Medium,
                        format!("Expected directory not found: {name}/"),
                    )
                    .with_path(dir)
                    .with_suggestion(format!("Create {name}/ for {purpose}")),
                );
            }
        }

        debug!(
            "Structure check found {} missing director(ies)",
            issues.len()
        );
        issues
    }

    /// Report files sitting outside their conventional location: test files
    /// in the project root, configuration modules under `src/`.
    pub fn check_misplaced_files(&self) -> Vec<ProjectIssue> {
        let mut issues = Vec::new();

        let root_test_files = list_files(&self.project_path, |name| {
            name.ends_with(".py") && (name.starts_with("test_") || name.ends_with("_test.py"))
        });
        if !root_test_files.is_empty() {
            issues.push(
                ProjectIssue::new(
                    IssueKind::MisplacedFile,
                    IssueSeverity::High,
                    format!("Test files in project root: {}", join_names(&root_test_files)),
                )
                .with_path(self.project_path.clone())
                .with_suggestion("Move test files into tests/"),
            );
        }

        let src_config_files = list_files(&self.project_path.join("src"), |name| {
            name.ends_with(".py") && name.contains("config")
        });
        if !src_config_files.is_empty() {
            issues.push(
                ProjectIssue::new(
                    IssueKind::MisplacedFile,
                    IssueSeverity::Medium,
                    format!(
                        "Configuration modules in src/: {}",
                        join_names(&src_config_files)
                    ),
                )
                .with_path(self.project_path.join("src"))
                .with_suggestion("Move configuration modules to the project root"),
            );
        }

        issues
    }
}

/// Non-recursive listing of file names in `dir` matching `predicate`.
fn list_files(dir: &Path, predicate: impl Fn(&str) -> bool) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| predicate(name))
        .collect();
    names.sort();
    names
}

fn join_names(names: &[String]) -> String {
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_dirs(root: &Path) {
        for (name, _) in EXPECTED_DIRECTORIES {
            fs::create_dir_all(root.join(name)).unwrap();
        }
    }

    #[test]
    fn test_complete_structure_is_clean() {
        let temp_dir = TempDir::new().unwrap();
        make_dirs(temp_dir.path());

        let monitor = StructureMonitor::new(temp_dir.path());
        assert!(monitor.check_structure().is_empty());
    }

    #[test]
    fn test_missing_directories_are_reported() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();

        let monitor = StructureMonitor::new(temp_dir.path());
        let issues = monitor.check_structure();

        assert_eq!(issues.len(), EXPECTED_DIRECTORIES.len() - 1);
        assert!(issues
            .iter()
            .all(|issue| issue.kind == IssueKind::MissingDirectory));
    }

    #[test]
    fn test_root_test_files_are_misplaced() {
        let temp_dir = TempDir::new().unwrap();
        make_dirs(temp_dir.path());
        fs::write(temp_dir.path().join("test_app.py"), "def test_x(): pass\n").unwrap();

        let monitor = StructureMonitor::new(temp_dir.path());
        let issues = monitor.check_misplaced_files();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MisplacedFile);
        assert_eq!(issues[0].severity, IssueSeverity::High);
        assert!(issues[0].description.contains("test_app.py"));
    }

    #[test]
    fn test_config_module_in_src_is_misplaced() {
        let temp_dir = TempDir::new().unwrap();
        make_dirs(temp_dir.path());
        fs::write(temp_dir.path().join("src/app_config.py"), "DEBUG = True\n").unwrap();

        let monitor = StructureMonitor::new(temp_dir.path());
        let issues = monitor.check_misplaced_files();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Medium);
    }

    #[test]
    fn test_properly_placed_files_are_clean() {
        let temp_dir = TempDir::new().unwrap();
        make_dirs(temp_dir.path());
        fs::write(temp_dir.path().join("tests/test_app.py"), "").unwrap();
        fs::write(temp_dir.path().join("config.py"), "").unwrap();

        let monitor = StructureMonitor::new(temp_dir.path());
        assert!(monitor.check_misplaced_files().is_empty());
    }
}
