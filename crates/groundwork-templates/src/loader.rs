//! Template loading from files and directories
//!
//! Loads `.tpl` files. Directory scans are recursive; files that cannot be
//! read are logged and skipped so one broken template does not abort a
//! whole scaffolding run.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::TemplateError;
use crate::models::Template;
use crate::scanner;

/// File extension recognized as a template.
pub const TEMPLATE_EXTENSION: &str = "tpl";

/// Loads templates from files and directories with a per-path cache.
#[derive(Debug, Default)]
pub struct TemplateLoader {
    cache: HashMap<PathBuf, Template>,
}

impl TemplateLoader {
    /// Create a new template loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a single template file.
    ///
    /// The template id is the file name with the `.tpl` suffix removed, so
    /// `README.md.tpl` loads as `README.md`.
    pub fn load_from_file(&mut self, path: &Path) -> Result<Template, TemplateError> {
        if let Some(cached) = self.cache.get(path) {
            return Ok(cached.clone());
        }

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| TemplateError::NotATemplate(path.display().to_string()))?;
        let id = file_name
            .strip_suffix(".tpl")
            .ok_or_else(|| TemplateError::NotATemplate(path.display().to_string()))?
            .to_string();

        let content = fs::read_to_string(path)?;
        let placeholders = scanner::placeholder_names(&content);
        debug!(
            "Loaded template {} with {} placeholder(s)",
            id,
            placeholders.len()
        );

        let template = Template {
            id,
            content,
            source: path.to_path_buf(),
            placeholders,
        };
        self.cache.insert(path.to_path_buf(), template.clone());

        Ok(template)
    }

    /// Load every `.tpl` file under a directory, recursively.
    ///
    /// A missing directory yields an empty list. Unreadable files are
    /// skipped with a warning.
    pub fn load_from_directory(&mut self, dir: &Path) -> Result<Vec<Template>, TemplateError> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut templates = Vec::new();
        self.scan_directory(dir, &mut templates)?;
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(templates)
    }

    fn scan_directory(
        &mut self,
        dir: &Path,
        templates: &mut Vec<Template>,
    ) -> Result<(), TemplateError> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                self.scan_directory(&path, templates)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some(TEMPLATE_EXTENSION) {
                match self.load_from_file(&path) {
                    Ok(template) => templates.push(template),
                    Err(error) => {
                        warn!("Failed to load template {}: {}", path.display(), error);
                    }
                }
            }
        }
        Ok(())
    }

    /// Number of templates currently cached.
    pub fn cached_templates(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached templates.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file_strips_tpl_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md.tpl");
        fs::write(&path, "# $PROJECT_NAME").unwrap();

        let mut loader = TemplateLoader::new();
        let template = loader.load_from_file(&path).unwrap();

        assert_eq!(template.id, "README.md");
        assert_eq!(template.content, "# $PROJECT_NAME");
        assert!(template.placeholders.contains("PROJECT_NAME"));
    }

    #[test]
    fn test_load_from_file_rejects_non_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        fs::write(&path, "# plain file").unwrap();

        let mut loader = TemplateLoader::new();
        assert!(loader.load_from_file(&path).is_err());
    }

    #[test]
    fn test_load_from_directory_recurses_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("b.md.tpl"), "b").unwrap();
        fs::write(temp_dir.path().join("nested/a.md.tpl"), "a").unwrap();
        fs::write(temp_dir.path().join("ignored.txt"), "not a template").unwrap();

        let mut loader = TemplateLoader::new();
        let templates = loader.load_from_directory(temp_dir.path()).unwrap();

        let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_load_from_missing_directory_is_empty() {
        let mut loader = TemplateLoader::new();
        let templates = loader
            .load_from_directory(Path::new("/nonexistent/templates"))
            .unwrap();
        assert!(templates.is_empty());
    }

    #[test]
    fn test_cache_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("x.md.tpl");
        fs::write(&path, "x").unwrap();

        let mut loader = TemplateLoader::new();
        loader.load_from_file(&path).unwrap();
        assert_eq!(loader.cached_templates(), 1);

        loader.clear_cache();
        assert_eq!(loader.cached_templates(), 0);
    }
}
