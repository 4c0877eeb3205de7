//! Template rendering with three-tier placeholder resolution
//!
//! Resolution order per distinct placeholder name: the caller's context,
//! then the default table, then unresolved. Unresolved occurrences are left
//! verbatim in the output and reported by name, so callers can still write
//! an inspectable file and decide afterwards whether missing variables are
//! acceptable.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::defaults::DefaultTable;
use crate::scanner;

/// Caller-supplied placeholder values for one render call.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: HashMap<String, String>,
}

impl RenderContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value for a placeholder name. Replaces any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Add multiple values at once.
    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in pairs {
            self.insert(name, value);
        }
    }

    /// Look up a value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether the context holds a value for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of values in the context.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RenderContext
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        context.extend(iter);
        context
    }
}

/// Result of rendering one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// The substituted text
    pub content: String,
    /// Names found in the template that neither the context nor the default
    /// table could satisfy. Each still appears verbatim in `content`.
    pub unresolved: BTreeSet<String>,
}

impl RenderResult {
    /// Whether every placeholder in the template was resolved.
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Renders templates against a caller context backed by a default table.
///
/// Pure and stateless between calls; safe to share across threads.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    defaults: DefaultTable,
}

impl TemplateRenderer {
    /// Create a renderer backed by the given default table.
    pub fn new(defaults: DefaultTable) -> Self {
        Self { defaults }
    }

    /// The default table this renderer consults.
    pub fn defaults(&self) -> &DefaultTable {
        &self.defaults
    }

    /// Substitute every recognized placeholder in `template`.
    ///
    /// Never fails: occurrences whose name resolves through neither the
    /// context nor the default table are left untouched and reported in the
    /// result's unresolved set. Substituted values are treated as opaque
    /// text and never re-scanned, so a value containing placeholder-like
    /// text survives verbatim.
    pub fn render(&self, template: &str, context: &RenderContext) -> RenderResult {
        // Pass one: collect every occurrence, then resolve each distinct
        // name exactly once so both syntaxes agree on the value.
        let occurrences = scanner::scan(template);

        let mut resolved: HashMap<&str, &str> = HashMap::new();
        let mut unresolved: BTreeSet<String> = BTreeSet::new();
        for occurrence in &occurrences {
            let name = occurrence.name.as_str();
            if resolved.contains_key(name) || unresolved.contains(name) {
                continue;
            }
            match context.get(name).or_else(|| self.defaults.get(name)) {
                Some(value) => {
                    resolved.insert(name, value);
                }
                None => {
                    unresolved.insert(name.to_string());
                }
            }
        }

        // Pass two: rebuild the output from the recorded spans. Unresolved
        // occurrences are copied verbatim in their original syntax.
        let mut content = String::with_capacity(template.len());
        let mut cursor = 0;
        for occurrence in &occurrences {
            content.push_str(&template[cursor..occurrence.start]);
            match resolved.get(occurrence.name.as_str()) {
                Some(value) => content.push_str(value),
                None => content.push_str(&template[occurrence.start..occurrence.end]),
            }
            cursor = occurrence.end;
        }
        content.push_str(&template[cursor..]);

        RenderResult {
            content,
            unresolved,
        }
    }
}
