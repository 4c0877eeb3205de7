//! Validation of project metadata before generation
//!
//! Checks are collected rather than fail-fast: one pass reports every
//! problem at once, with warnings for absent optional metadata.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::types::ProjectConfig;

/// Licenses accepted for generated projects.
pub const VALID_LICENSES: &[&str] = &[
    "MIT",
    "Apache-2.0",
    "GPL-3.0",
    "BSD-3-Clause",
    "ISC",
    "LGPL-3.0",
    "MPL-2.0",
    "Unlicense",
];

/// Names that would collide with standard project directories or tooling.
const RESERVED_NAMES: &[&str] = &[
    "test",
    "tests",
    "src",
    "docs",
    "examples",
    "build",
    "dist",
    "node_modules",
    ".git",
    ".github",
    "venv",
    "env",
    "python",
];

fn project_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").expect("Invalid regex"))
}

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex")
    })
}

fn github_user_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // No consecutive or trailing hyphens, max 39 characters
    REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9](?:-?[a-zA-Z0-9]){0,38}$").expect("Invalid regex"))
}

fn python_version_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^3\.(?:[89]|[1-9][0-9])$").expect("Invalid regex"))
}

/// Outcome of validating one configuration.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether generation may proceed
    pub is_valid: bool,
    /// Blocking problems
    pub errors: Vec<String>,
    /// Non-blocking observations
    pub warnings: Vec<String>,
}

/// Validates project metadata and destination paths.
#[derive(Debug, Default)]
pub struct ProjectValidator {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ProjectValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a whole configuration plus its destination path.
    pub fn validate_all(mut self, config: &ProjectConfig, destination: &Path) -> ValidationReport {
        debug!("Validating project configuration '{}'", config.project_name);

        self.validate_project_name(&config.project_name);
        self.validate_description(&config.description);
        self.validate_email(&config.email);
        self.validate_github_user(&config.github_user);
        self.validate_python_version(&config.python_version_min);
        self.validate_license(&config.license);
        self.validate_destination(destination);

        let is_valid = self.errors.is_empty();
        if is_valid {
            info!("Validation passed for project '{}'", config.project_name);
        } else {
            info!(
                "Validation failed for project '{}' with {} error(s)",
                config.project_name,
                self.errors.len()
            );
        }

        ValidationReport {
            is_valid,
            errors: self.errors,
            warnings: self.warnings,
        }
    }

    /// Project name: required, 2-50 characters, letter first, no reserved
    /// names.
    pub fn validate_project_name(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            self.errors.push("Project name is required".to_string());
            return false;
        }
        if name.len() < 2 {
            self.errors
                .push("Project name must be at least 2 characters".to_string());
            return false;
        }
        if name.len() > 50 {
            self.errors
                .push("Project name must not exceed 50 characters".to_string());
            return false;
        }
        if !project_name_regex().is_match(name) {
            self.errors.push(
                "Project name must start with a letter and contain only letters, digits, hyphens, and underscores"
                    .to_string(),
            );
            return false;
        }
        if RESERVED_NAMES.contains(&name.to_lowercase().as_str()) {
            self.errors
                .push(format!("'{name}' is reserved and cannot be used as a project name"));
            return false;
        }
        true
    }

    /// Description: required, 10-500 characters.
    pub fn validate_description(&mut self, description: &str) -> bool {
        let description = description.trim();
        if description.is_empty() {
            self.errors
                .push("Project description is required".to_string());
            return false;
        }
        if description.len() < 10 {
            self.errors
                .push("Description must be at least 10 characters".to_string());
            return false;
        }
        if description.len() > 500 {
            self.errors
                .push("Description must not exceed 500 characters".to_string());
            return false;
        }
        true
    }

    /// Email: optional; warned when absent, checked when present.
    pub fn validate_email(&mut self, email: &str) -> bool {
        let email = email.trim();
        if email.is_empty() {
            self.warnings
                .push("Email not provided (optional)".to_string());
            return true;
        }
        if !email_regex().is_match(email) {
            self.errors.push("Invalid email format".to_string());
            return false;
        }
        true
    }

    /// GitHub username: optional; warned when absent, checked when present.
    pub fn validate_github_user(&mut self, username: &str) -> bool {
        let username = username.trim();
        if username.is_empty() {
            self.warnings
                .push("GitHub username not provided (optional)".to_string());
            return true;
        }
        if !github_user_regex().is_match(username) {
            self.errors.push(
                "Invalid GitHub username: letters, digits, and single hyphens only, starting with a letter or digit, at most 39 characters"
                    .to_string(),
            );
            return false;
        }
        true
    }

    /// Minimum Python version: optional; must be 3.8 or later when given.
    pub fn validate_python_version(&mut self, version: &str) -> bool {
        let version = version.trim();
        if version.is_empty() {
            self.warnings
                .push("Python version not specified, defaulting to 3.8".to_string());
            return true;
        }
        if !python_version_regex().is_match(version) {
            self.errors
                .push("Invalid Python version: expected 3.8 or later (3.x)".to_string());
            return false;
        }
        true
    }

    /// License: optional; must be a known identifier when given.
    pub fn validate_license(&mut self, license: &str) -> bool {
        let license = license.trim();
        if license.is_empty() {
            self.warnings
                .push("License not specified, defaulting to MIT".to_string());
            return true;
        }
        if !VALID_LICENSES.contains(&license) {
            self.errors.push(format!(
                "Invalid license: valid options are {}",
                VALID_LICENSES.join(", ")
            ));
            return false;
        }
        true
    }

    /// Destination: parent must exist, target must not.
    pub fn validate_destination(&mut self, destination: &Path) -> bool {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                self.errors.push(format!(
                    "Parent directory '{}' does not exist",
                    parent.display()
                ));
                return false;
            }
        }
        if destination.exists() {
            self.errors.push(format!(
                "Destination '{}' already exists",
                destination.display()
            ));
            return false;
        }
        true
    }
}
