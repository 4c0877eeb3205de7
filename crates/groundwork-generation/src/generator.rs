//! Project generator
//!
//! Orchestrates one scaffolding run: validation, directory structure,
//! static files, template rendering with destination mapping, the optional
//! context summary, and the final report.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use groundwork_config::{build_context, ProjectConfig, ProjectValidator};
use groundwork_templates::{DefaultTable, TemplateLoader, TemplateRenderer};

use crate::error::GenerationError;
use crate::models::{FileAction, GenerationOptions, GenerationReport, WrittenFile};
use crate::structure::{self, PROJECT_DIRECTORIES};
use crate::writer::OutputWriter;

/// Subdirectory of the template directory whose files are copied verbatim.
pub const STATIC_DIR: &str = "static";

/// Name of the generated project summary file.
pub const CONTEXT_FILE: &str = "CONTEXT.md";

/// Generates projects from a template directory.
pub struct ProjectGenerator {
    template_dir: PathBuf,
    renderer: TemplateRenderer,
    writer: OutputWriter,
}

impl ProjectGenerator {
    /// Create a generator over `template_dir`, backed by `defaults`.
    pub fn new(template_dir: impl Into<PathBuf>, defaults: DefaultTable) -> Self {
        Self::with_options(template_dir, defaults, GenerationOptions::default())
    }

    /// Create a generator with explicit run options.
    pub fn with_options(
        template_dir: impl Into<PathBuf>,
        defaults: DefaultTable,
        options: GenerationOptions,
    ) -> Self {
        Self {
            template_dir: template_dir.into(),
            renderer: TemplateRenderer::new(defaults),
            writer: OutputWriter::new(options),
        }
    }

    /// Generate a project at `destination`.
    ///
    /// Fails on invalid configuration or filesystem errors. Unresolved
    /// placeholders do not fail the run: every template still produces a
    /// file, and the report carries the names left unfilled.
    pub fn generate(
        &self,
        config: &ProjectConfig,
        destination: &Path,
    ) -> Result<GenerationReport, GenerationError> {
        let validation = ProjectValidator::new().validate_all(config, destination);
        for warning in &validation.warnings {
            warn!("{warning}");
        }
        if !validation.is_valid {
            return Err(GenerationError::InvalidConfig {
                errors: validation.errors,
            });
        }

        info!(
            "Generating project '{}' at {}",
            config.project_name,
            destination.display()
        );

        let dry_run = self.writer.options().dry_run;
        let created_directories = if dry_run {
            std::iter::once(destination.to_path_buf())
                .chain(
                    PROJECT_DIRECTORIES
                        .iter()
                        .map(|(name, _)| destination.join(name)),
                )
                .collect()
        } else {
            structure::create_structure(destination)?
        };

        let mut files = Vec::new();
        self.copy_static_files(destination, &mut files)?;
        self.process_templates(config, destination, &mut files)?;

        if config.create_context_file {
            let summary = context_summary(config, destination);
            let path = destination.join(CONTEXT_FILE);
            let action = self.writer.write(&path, &summary)?;
            files.push(WrittenFile {
                path,
                action,
                unresolved: Default::default(),
            });
        }

        let unresolved: std::collections::BTreeSet<String> = files
            .iter()
            .flat_map(|file| file.unresolved.iter().cloned())
            .collect();
        if !unresolved.is_empty() {
            warn!(
                "Project '{}' contains unfilled placeholders: {}",
                config.project_name,
                unresolved
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        Ok(GenerationReport {
            project_name: config.project_name.clone(),
            root: destination.to_path_buf(),
            timestamp: chrono::Local::now(),
            created_directories,
            files,
            unresolved,
            dry_run,
        })
    }

    /// Copy everything under `<template_dir>/static/` into the project,
    /// preserving relative paths.
    fn copy_static_files(
        &self,
        destination: &Path,
        files: &mut Vec<WrittenFile>,
    ) -> Result<(), GenerationError> {
        let static_dir = self.template_dir.join(STATIC_DIR);
        if !static_dir.is_dir() {
            return Ok(());
        }

        for entry in WalkDir::new(&static_dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
        {
            let relative = entry
                .path()
                .strip_prefix(&static_dir)
                .unwrap_or(entry.path());
            let target = destination.join(relative);
            let action = self.writer.copy(entry.path(), &target)?;
            files.push(WrittenFile {
                path: target,
                action,
                unresolved: Default::default(),
            });
        }

        Ok(())
    }

    /// Render every `.tpl` in the template directory into the project.
    fn process_templates(
        &self,
        config: &ProjectConfig,
        destination: &Path,
        files: &mut Vec<WrittenFile>,
    ) -> Result<(), GenerationError> {
        let context = build_context(config);
        let mut loader = TemplateLoader::new();
        let templates = loader.load_from_directory(&self.template_dir)?;

        if templates.is_empty() {
            warn!(
                "No templates found under {}",
                self.template_dir.display()
            );
        }

        for template in templates {
            let rendered = self.renderer.render(&template.content, &context);
            let target = self.destination_for(&template.id, config, destination);
            let action = self.writer.write(&target, &rendered.content)?;
            files.push(WrittenFile {
                path: target,
                action,
                unresolved: rendered.unresolved,
            });
        }

        Ok(())
    }

    /// Map a template id to its output path inside the project.
    fn destination_for(&self, id: &str, config: &ProjectConfig, destination: &Path) -> PathBuf {
        match id {
            "main_module.py" => destination
                .join("src")
                .join(format!("{}.py", config.main_module())),
            "TUTORIAL.md" => destination.join("docs").join(id),
            _ => destination.join(id),
        }
    }
}

/// Render the CONTEXT.md summary for a generated project.
fn context_summary(config: &ProjectConfig, destination: &Path) -> String {
    let date = chrono::Local::now().format("%Y-%m-%d");
    let structure_lines: String = PROJECT_DIRECTORIES
        .iter()
        .map(|(name, purpose)| format!("- `{name}/` - {purpose}\n"))
        .collect();

    format!(
        "# CONTEXT - {name}\n\n\
         ## Project information\n\n\
         - **Name**: {name}\n\
         - **Description**: {description}\n\
         - **Type**: {project_type}\n\
         - **Author**: {author}\n\
         - **Created**: {date}\n\n\
         ## Generated structure\n\n\
         Root: `{root}`\n\n\
         {structure_lines}\n\
         ## Next steps\n\n\
         1. Review the generated files and fill in anything left blank\n\
         2. Implement the core functionality under `src/`\n\
         3. Write unit tests under `tests/`\n",
        name = config.project_name,
        description = config.description,
        project_type = config.project_type,
        author = config.author,
        date = date,
        root = destination.display(),
        structure_lines = structure_lines,
    )
}
