//! Property-based tests for configuration loading and default merging

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use groundwork_config::{ConfigLoader, ProjectConfig};

/// Strategy for plausible project names
fn project_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{1,20}".prop_map(|s| s.to_string())
}

/// Strategy for free-text fields without JSON-hostile characters
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,-]{10,60}".prop_map(|s| s.to_string())
}

proptest! {
    /// Property: a config file carrying only a project name takes the
    /// documented defaults for every other field.
    #[test]
    fn prop_minimal_config_fills_defaults(name in project_name_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.json");
        fs::write(&path, format!(r#"{{"project_name": "{name}"}}"#)).unwrap();

        let config = ConfigLoader::new().load(&path).unwrap();
        let defaults = ProjectConfig::default();

        prop_assert_eq!(config.project_name, name);
        prop_assert_eq!(config.author, defaults.author);
        prop_assert_eq!(config.license, defaults.license);
        prop_assert_eq!(config.python_version_min, defaults.python_version_min);
        prop_assert_eq!(config.project_type, defaults.project_type);
        prop_assert_eq!(config.dependencies, defaults.dependencies);
        prop_assert_eq!(config.create_context_file, defaults.create_context_file);
    }

    /// Property: explicitly configured fields survive loading unchanged
    /// while the rest still merge to defaults.
    #[test]
    fn prop_explicit_fields_survive_merge(
        name in project_name_strategy(),
        description in text_strategy(),
        author in "[A-Z][a-z]{2,12}",
    ) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("project.json");
        let body = serde_json::json!({
            "project_name": name,
            "description": description,
            "author": author,
        });
        fs::write(&path, body.to_string()).unwrap();

        let config = ConfigLoader::new().load(&path).unwrap();

        prop_assert_eq!(config.project_name, name);
        prop_assert_eq!(config.description, description);
        prop_assert_eq!(config.author, author);
        prop_assert_eq!(config.license, ProjectConfig::default().license);
    }

    /// Property: JSON and YAML renderings of the same configuration load
    /// to identical values. The text is kept to characters that YAML plain
    /// scalars carry through unchanged.
    #[test]
    fn prop_json_and_yaml_load_identically(
        name in project_name_strategy(),
        description in "[a-zA-Z][a-zA-Z0-9 .]{8,40}[a-zA-Z0-9]",
    ) {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("project.json");
        let yaml_path = temp_dir.path().join("project.yaml");

        fs::write(
            &json_path,
            serde_json::json!({"project_name": name, "description": description}).to_string(),
        )
        .unwrap();
        fs::write(
            &yaml_path,
            format!("project_name: {name}\ndescription: {description}\n"),
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let from_json = loader.load(&json_path).unwrap();
        let from_yaml = loader.load(&yaml_path).unwrap();

        prop_assert_eq!(from_json, from_yaml);
    }
}
