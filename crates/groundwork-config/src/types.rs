//! Typed project configuration
//!
//! Every field carries a serde default, so a partial configuration file
//! merges with the documented defaults at parse time.

use std::fmt;

use heck::{ToPascalCase, ToSnakeCase};
use serde::{Deserialize, Serialize};

/// Kind of project to scaffold.
///
/// Serialized with the human-readable labels accepted in configuration
/// files, so an unknown label is rejected at parse time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    /// Reusable Python library
    #[default]
    #[serde(rename = "Python Library")]
    Library,
    /// Command-line tool
    #[serde(rename = "Python CLI Tool")]
    CliTool,
    /// Flask web application
    #[serde(rename = "Python Web App (Flask)")]
    FlaskApp,
    /// Django web application
    #[serde(rename = "Python Web App (Django)")]
    DjangoApp,
    /// FastAPI web application
    #[serde(rename = "Python Web App (FastAPI)")]
    FastApiApp,
    /// Data-science project
    #[serde(rename = "Python Data Science")]
    DataScience,
    /// Machine-learning project
    #[serde(rename = "Python ML/AI")]
    MachineLearning,
    /// Anything else
    #[serde(rename = "Other")]
    Other,
}

impl ProjectType {
    /// The configuration-file label for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Library => "Python Library",
            ProjectType::CliTool => "Python CLI Tool",
            ProjectType::FlaskApp => "Python Web App (Flask)",
            ProjectType::DjangoApp => "Python Web App (Django)",
            ProjectType::FastApiApp => "Python Web App (FastAPI)",
            ProjectType::DataScience => "Python Data Science",
            ProjectType::MachineLearning => "Python ML/AI",
            ProjectType::Other => "Other",
        }
    }

    /// Default main-dependency block for a requirements file of this type.
    pub fn main_dependencies(&self) -> &'static str {
        match self {
            ProjectType::Library => "# Main dependencies\n# requests>=2.28.0",
            ProjectType::CliTool => "# Main dependencies\nclick>=8.0.0\nrich>=12.0.0",
            ProjectType::FlaskApp => "# Main dependencies\nflask>=2.0.0\nflask-cors>=3.0.0",
            ProjectType::DjangoApp => {
                "# Main dependencies\ndjango>=4.0.0\ndjangorestframework>=3.14.0"
            }
            ProjectType::FastApiApp => "# Main dependencies\nfastapi>=0.100.0\nuvicorn>=0.23.0",
            ProjectType::DataScience => {
                "# Main dependencies\npandas>=1.5.0\nnumpy>=1.21.0\nmatplotlib>=3.5.0"
            }
            ProjectType::MachineLearning => {
                "# Main dependencies\ntorch>=1.12.0\ntensorflow>=2.10.0\nscikit-learn>=1.1.0"
            }
            ProjectType::Other => "# Main dependencies\n# Add as needed",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency lists for the generated project's requirements files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
    /// Runtime dependencies
    pub main: Vec<String>,
    /// Development tooling
    pub development: Vec<String>,
    /// Test tooling
    pub testing: Vec<String>,
    /// Optional extras
    pub optional: Vec<String>,
}

/// Full configuration for one scaffolding run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name (also drives derived module/class names)
    pub project_name: String,
    /// Short description
    pub description: String,
    /// Longer description for documentation files
    pub detailed_description: String,
    /// Kind of project to scaffold
    pub project_type: ProjectType,
    /// Author name
    pub author: String,
    /// Contact email (optional)
    pub email: String,
    /// GitHub username (optional)
    pub github_user: String,
    /// Repository URL; inferred from the GitHub user when empty
    pub repository_url: String,
    /// Minimum Python version for the generated project
    pub python_version_min: String,
    /// License identifier
    pub license: String,
    /// Main objective, used in documentation templates
    pub objective: String,
    /// Main functionality, used in documentation templates
    pub main_functionality: String,
    /// Dependency lists
    pub dependencies: DependencyConfig,
    /// Whether to write a CONTEXT.md summary into the generated project
    pub create_context_file: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            description: String::new(),
            detailed_description: String::new(),
            project_type: ProjectType::default(),
            author: "Developer".to_string(),
            email: String::new(),
            github_user: String::new(),
            repository_url: String::new(),
            python_version_min: "3.8".to_string(),
            license: "MIT".to_string(),
            objective: String::new(),
            main_functionality: String::new(),
            dependencies: DependencyConfig::default(),
            create_context_file: true,
        }
    }
}

impl ProjectConfig {
    /// Module name derived from the project name (`my-tool` -> `my_tool`).
    pub fn main_module(&self) -> String {
        self.project_name.to_snake_case()
    }

    /// Class name derived from the project name (`my-tool` -> `MyTool`).
    pub fn main_class(&self) -> String {
        self.project_name.to_pascal_case()
    }

    /// Repository URL, inferred from the GitHub user and project name when
    /// the configuration leaves it empty.
    pub fn effective_repository_url(&self) -> String {
        if !self.repository_url.is_empty() {
            return self.repository_url.clone();
        }
        if !self.github_user.is_empty() && !self.project_name.is_empty() {
            return format!(
                "https://github.com/{}/{}",
                self.github_user, self.project_name
            );
        }
        String::new()
    }
}
