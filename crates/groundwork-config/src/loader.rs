//! Configuration loading from JSON and YAML files

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::types::ProjectConfig;

/// Loads project configurations from files.
///
/// Supported formats are `.json`, `.yaml`, and `.yml`. Fields omitted in
/// the file take their documented defaults at parse time.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Load a configuration file.
    pub fn load(&self, path: &Path) -> Result<ProjectConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let contents = fs::read_to_string(path)?;

        let config = match extension {
            "json" => serde_json::from_str(&contents)?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)?,
            other => return Err(ConfigError::UnsupportedFormat(format!(".{other}"))),
        };

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Write a starter configuration file holding the default values, in
    /// the format implied by the path's extension.
    pub fn write_starter(&self, path: &Path) -> Result<(), ConfigError> {
        let config = ProjectConfig::default();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        let contents = match extension {
            "json" => serde_json::to_string_pretty(&config)?,
            "yaml" | "yml" => serde_yaml::to_string(&config)?,
            other => return Err(ConfigError::UnsupportedFormat(format!(".{other}"))),
        };

        fs::write(path, contents)?;
        debug!("Wrote starter configuration to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectType;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.json");
        fs::write(
            &path,
            r#"{"project_name": "demo", "description": "A demo project", "project_type": "Python CLI Tool"}"#,
        )
        .unwrap();

        let config = ConfigLoader::new().load(&path).unwrap();
        assert_eq!(config.project_name, "demo");
        assert_eq!(config.project_type, ProjectType::CliTool);
    }

    #[test]
    fn test_load_yaml_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.yaml");
        fs::write(&path, "project_name: demo\nauthor: Ada\n").unwrap();

        let config = ConfigLoader::new().load(&path).unwrap();
        assert_eq!(config.project_name, "demo");
        assert_eq!(config.author, "Ada");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.json");
        fs::write(&path, r#"{"project_name": "demo"}"#).unwrap();

        let config = ConfigLoader::new().load(&path).unwrap();
        assert_eq!(config.author, "Developer");
        assert_eq!(config.license, "MIT");
        assert_eq!(config.python_version_min, "3.8");
        assert!(config.create_context_file);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = ConfigLoader::new().load(Path::new("/nonexistent/project.json"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.toml");
        fs::write(&path, "project_name = \"demo\"").unwrap();

        let result = ConfigLoader::new().load(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_write_starter_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("starter.yaml");

        let loader = ConfigLoader::new();
        loader.write_starter(&path).unwrap();
        let config = loader.load(&path).unwrap();

        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let result = ConfigLoader::new().load(&path);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
