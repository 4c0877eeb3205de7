//! Standard directory structure for generated projects

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GenerationError;

/// Directories every generated project starts with, and their purpose.
pub const PROJECT_DIRECTORIES: &[(&str, &str)] = &[
    ("src", "Main source code"),
    ("tests", "Unit tests"),
    ("docs", "Documentation"),
    ("examples", "Usage examples"),
    ("logs", "Log files"),
];

/// Create the standard directory structure under `root`.
///
/// Returns the directories created, root first. Existing directories are
/// left alone.
pub fn create_structure(root: &Path) -> Result<Vec<PathBuf>, GenerationError> {
    let mut created = Vec::with_capacity(PROJECT_DIRECTORIES.len() + 1);

    fs::create_dir_all(root)?;
    created.push(root.to_path_buf());

    for (name, purpose) in PROJECT_DIRECTORIES {
        let dir = root.join(name);
        fs::create_dir_all(&dir)?;
        debug!("Created {}/ ({})", name, purpose);
        created.push(dir);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure_makes_all_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("demo");

        let created = create_structure(&root).unwrap();

        assert_eq!(created.len(), PROJECT_DIRECTORIES.len() + 1);
        for (name, _) in PROJECT_DIRECTORIES {
            assert!(root.join(name).is_dir(), "missing {name}/");
        }
    }

    #[test]
    fn test_create_structure_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("demo");

        create_structure(&root).unwrap();
        create_structure(&root).unwrap();

        assert!(root.join("src").is_dir());
    }
}
