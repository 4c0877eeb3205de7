//! Render-context construction from project configuration
//!
//! Maps a validated `ProjectConfig` to the placeholder namespace consumed
//! by the stock templates. Keys the configuration cannot supply (roadmap
//! steps, dependency blocks for empty lists) are deliberately left out so
//! the renderer's default table provides them.

use chrono::Local;
use groundwork_templates::RenderContext;
use tracing::debug;

use crate::types::ProjectConfig;

/// Build the placeholder context for one scaffolding run.
pub fn build_context(config: &ProjectConfig) -> RenderContext {
    let mut context = RenderContext::new();
    let today = Local::now().format("%Y-%m-%d").to_string();
    let main_class = config.main_class();

    context.insert("PROJECT_NAME", config.project_name.as_str());
    context.insert("PROJECT_DESCRIPTION", config.description.as_str());
    context.insert("DETAILED_DESCRIPTION", config.detailed_description.as_str());
    context.insert("PROJECT_OBJECTIVE", config.objective.as_str());
    context.insert("MAIN_FUNCTIONALITY", config.main_functionality.as_str());

    context.insert("PROJECT_TYPE", config.project_type.as_str());
    context.insert("AUTHOR", config.author.as_str());
    context.insert("CONTACT_EMAIL", config.email.as_str());
    context.insert("GITHUB_USER", config.github_user.as_str());
    context.insert("REPOSITORY_URL", config.effective_repository_url());
    context.insert("PYTHON_VERSION_MIN", config.python_version_min.as_str());
    context.insert("LICENSE", config.license.as_str());

    context.insert("CREATION_DATE", today.as_str());
    context.insert("UPDATE_DATE", today.as_str());

    context.insert("MAIN_MODULE", config.main_module());
    context.insert("MAIN_CLASS", main_class.as_str());

    context.insert(
        "USAGE_EXAMPLE",
        format!(
            "# Create an instance\ninstance = {main_class}()\n# Run the main functionality\nresult = instance.process()"
        ),
    );
    context.insert(
        "CONFIG_EXAMPLE",
        format!(
            "# Configuration for {}\nDEBUG = True\nLOG_LEVEL = 'INFO'",
            config.project_name
        ),
    );

    // Dependency blocks: an explicit list wins, an empty main list falls
    // back to the per-type block, the remaining empty lists fall through to
    // the default table.
    if config.dependencies.main.is_empty() {
        context.insert(
            "MAIN_DEPENDENCIES",
            config.project_type.main_dependencies(),
        );
    } else {
        context.insert("MAIN_DEPENDENCIES", config.dependencies.main.join("\n"));
    }
    if !config.dependencies.development.is_empty() {
        context.insert(
            "DEV_DEPENDENCIES",
            config.dependencies.development.join("\n"),
        );
    }
    if !config.dependencies.testing.is_empty() {
        context.insert("TEST_DEPENDENCIES", config.dependencies.testing.join("\n"));
    }
    if !config.dependencies.optional.is_empty() {
        context.insert(
            "OPTIONAL_DEPENDENCIES",
            config.dependencies.optional.join("\n"),
        );
    }

    debug!(
        "Built render context with {} value(s) for project '{}'",
        context.len(),
        config.project_name
    );
    context
}
