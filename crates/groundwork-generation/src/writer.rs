//! Output writing with dry-run and skip-existing support

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::GenerationError;
use crate::models::{FileAction, GenerationOptions};

/// Writes generated content to files according to the run options.
#[derive(Debug, Clone, Default)]
pub struct OutputWriter {
    options: GenerationOptions,
}

impl OutputWriter {
    /// Create a writer with the given options.
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    /// The options this writer was built with.
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Write `content` to `path`, creating parent directories as needed.
    ///
    /// Under dry-run nothing is touched and the action is `Previewed`. An
    /// existing file is skipped unless overwriting was requested.
    pub fn write(&self, path: &Path, content: &str) -> Result<FileAction, GenerationError> {
        if self.options.dry_run {
            debug!("Dry-run: would write {}", path.display());
            return Ok(FileAction::Previewed);
        }

        if path.exists() && !self.options.overwrite {
            debug!("Skipping existing file {}", path.display());
            return Ok(FileAction::Skipped);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        debug!("Wrote {}", path.display());
        Ok(FileAction::Written)
    }

    /// Copy a file verbatim, with the same dry-run and skip semantics.
    pub fn copy(&self, source: &Path, destination: &Path) -> Result<FileAction, GenerationError> {
        if self.options.dry_run {
            debug!("Dry-run: would copy {}", destination.display());
            return Ok(FileAction::Previewed);
        }

        if destination.exists() && !self.options.overwrite {
            debug!("Skipping existing file {}", destination.display());
            return Ok(FileAction::Skipped);
        }

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, destination)?;
        debug!("Copied {} -> {}", source.display(), destination.display());
        Ok(FileAction::Written)
    }
}
