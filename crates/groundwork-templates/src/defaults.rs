//! Process-wide fallback values for placeholders
//!
//! The default table is static configuration data constructed once at
//! startup and passed by reference into the renderer. It is immutable after
//! construction, so sharing it across threads needs no locking.

use std::collections::HashMap;

/// Read-only mapping from placeholder name to fallback value.
///
/// Consulted when the caller's context omits a name; the context always
/// wins on collision.
#[derive(Debug, Clone, Default)]
pub struct DefaultTable {
    values: HashMap<String, String>,
}

impl DefaultTable {
    /// Create an empty table (no fallbacks at all).
    pub fn empty() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Create a table from name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// The standard scaffolding fallbacks: metadata defaults plus the
    /// boilerplate roadmap and dependency blocks used by the stock
    /// templates.
    pub fn standard() -> Self {
        Self::from_pairs([
            ("AUTHOR", "Developer"),
            ("CONTACT_EMAIL", ""),
            ("GITHUB_USER", ""),
            ("REPOSITORY_URL", ""),
            ("PYTHON_VERSION_MIN", "3.8"),
            ("LICENSE", "MIT"),
            ("PROJECT_TYPE", "Python Library"),
            ("INITIAL_STATUS", "Initial phase - setup"),
            ("FIRST_STEP", "Implement core functionality"),
            ("SECOND_STEP", "Write unit tests"),
            ("THIRD_STEP", "Document the API"),
            ("NEXT_STEP", "Implement the first feature"),
            (
                "DEV_DEPENDENCIES",
                "pytest>=7.0.0\npytest-cov>=4.0.0\nblack>=22.0.0\nflake8>=5.0.0",
            ),
            (
                "TEST_DEPENDENCIES",
                "pytest>=7.0.0\npytest-cov>=4.0.0\npytest-asyncio>=0.21.0",
            ),
            (
                "OPTIONAL_DEPENDENCIES",
                "# Optional dependencies\n# requests>=2.28.0\n# numpy>=1.21.0",
            ),
        ])
    }

    /// Look up a fallback value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether a fallback exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of fallback entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
