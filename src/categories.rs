//! Category labels and display priority.
//!
//! Known category directories (`ai_integration`, `messages`, ...) get a
//! human label and a fixed position; everything else falls back to its
//! title-cased name and sorts alphabetically after the known ones.
//!
//! The table is plain data passed into the builders, so tests and config files
//! can supply their own without touching any global state.

use crate::naming;
use serde::{Deserialize, Serialize};

/// Reserved directory name that holds versioned documentation bundles.
pub const SNAPSHOTS_DIR: &str = "snapshots";

/// One `(key, label)` row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Directory name this row applies to.
    pub key: String,
    /// Label shown in the sidebar.
    pub label: String,
}

impl Category {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Ordered category table. Row position is display priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    entries: Vec<Category>,
}

impl CategoryTable {
    pub fn new(entries: Vec<Category>) -> Self {
        Self { entries }
    }

    /// A table with no overrides: every name is title-cased and sorted alphabetically.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn entries(&self) -> &[Category] {
        &self.entries
    }

    /// Display priority of a known category, `None` for unknown names.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|c| c.key == name)
    }

    /// Label for a directory name. Always returns something.
    pub fn label_for(&self, name: &str) -> String {
        self.entries
            .iter()
            .find(|c| c.key == name)
            .map(|c| c.label.clone())
            .unwrap_or_else(|| naming::display_title(name))
    }

    /// Order category names: known ones in table order, then the rest alphabetically.
    pub fn order<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let mut known: Vec<(usize, &str)> = Vec::new();
        let mut other: Vec<&str> = Vec::new();
        for name in names {
            let name = name.as_ref();
            match self.rank(name) {
                Some(rank) => known.push((rank, name)),
                None => other.push(name),
            }
        }
        known.sort();
        other.sort();
        known
            .into_iter()
            .map(|(_, name)| name)
            .chain(other)
            .map(str::to_string)
            .collect()
    }
}

impl Default for CategoryTable {
    /// Categories of the tracked bot repository's generated docs.
    fn default() -> Self {
        Self::new(vec![
            Category::new("ai_integration", "AI Integration"),
            Category::new("design_standards", "Design Standards"),
            Category::new("messages", "Messages"),
            Category::new("platform_adapters", "Platform Adapters"),
            Category::new("plugin_system", "Plugin System"),
            Category::new("learning_system", "Learning System"),
            Category::new("storage_utils", "Storage Utils"),
            Category::new("api", "API"),
        ])
    }
}

/// Check a category key: one path segment made of ASCII alphanumerics, `_`
/// and `-`, starting with an alphanumeric, and not the reserved snapshots name.
pub fn validate_key(key: &str) -> Result<(), String> {
    let mut chars = key.chars();
    match chars.next() {
        None => return Err("category key must not be empty".into()),
        Some(c) if !c.is_ascii_alphanumeric() => {
            return Err(format!(
                "category key '{key}' must start with an ASCII letter or digit"
            ));
        }
        Some(_) => {}
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-')) {
        return Err(format!(
            "category key '{key}' contains invalid character '{bad}'"
        ));
    }
    if key == SNAPSHOTS_DIR {
        return Err(format!("category key '{SNAPSHOTS_DIR}' is reserved"));
    }
    Ok(())
}
