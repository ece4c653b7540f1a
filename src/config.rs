//! Site configuration module.
//!
//! Handles loading, validating, and merging `docnav.toml`. Stock defaults are
//! serialized to a TOML table and the user file is deep-merged on top, so a
//! config file only needs the keys it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! suffix = ".md"     # Filename suffix of pages
//! max_depth = 2      # Directory levels expanded below each category
//!
//! [[categories]]     # Known categories, in display order
//! key = "ai_integration"
//! label = "AI Integration"
//!
//! [[sidebars]]       # One sidebar per documentation root
//! route = ""         # URL prefix ("" = site root)
//! dir = "."          # Directory, relative to the docs root
//! ```
//!
//! Arrays replace their default entirely: a file that lists `[[categories]]`
//! defines the whole table.
//!
//! Unknown keys are rejected to catch typos early.

use crate::categories::{self, CategoryTable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config filename looked up in the docs root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "docnav.toml";

/// Upper bound for `max_depth`; deeper trees are not useful in a sidebar.
pub const MAX_DEPTH_LIMIT: usize = 16;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `docnav.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Filename suffix that marks a page.
    pub suffix: String,
    /// Directory levels expanded below the starting directory.
    pub max_depth: usize,
    /// Known categories in display order, with their labels.
    pub categories: CategoryTable,
    /// Documentation roots to build sidebars for.
    pub sidebars: Vec<SidebarSource>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            suffix: crate::sidebar::DEFAULT_SUFFIX.to_string(),
            max_depth: crate::sidebar::DEFAULT_MAX_DEPTH,
            categories: CategoryTable::default(),
            sidebars: vec![SidebarSource::default()],
        }
    }
}

/// One documentation root and the route it is published under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarSource {
    /// URL prefix without trailing slash, e.g. `/develop/llm/maibot/main`.
    /// Empty for the site root.
    pub route: String,
    /// Directory relative to the docs root.
    pub dir: PathBuf,
}

impl Default for SidebarSource {
    fn default() -> Self {
        Self {
            route: String::new(),
            dir: PathBuf::from("."),
        }
    }
}

impl SiteConfig {
    /// Trim trailing slashes from routes so `"/docs/"` and `"/docs"` build the same links.
    pub fn normalize(&mut self) {
        for source in &mut self.sidebars {
            let trimmed = source.route.trim_end_matches('/').len();
            source.route.truncate(trimmed);
        }
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.suffix.starts_with('.') || self.suffix.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "suffix must be a dot followed by an extension, got '{}'",
                self.suffix
            )));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Validation(format!(
                "max_depth must be at most {MAX_DEPTH_LIMIT}"
            )));
        }

        let mut keys = HashSet::new();
        for category in self.categories.entries() {
            categories::validate_key(&category.key).map_err(ConfigError::Validation)?;
            if category.label.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "category '{}' has an empty label",
                    category.key
                )));
            }
            if !keys.insert(category.key.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate category key '{}'",
                    category.key
                )));
            }
        }

        if self.sidebars.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[sidebars]] entry is required".into(),
            ));
        }
        let mut routes = HashSet::new();
        for source in &self.sidebars {
            if !source.route.is_empty() && !source.route.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "sidebar route '{}' must start with '/'",
                    source.route
                )));
            }
            if !routes.insert(source.route.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate sidebar route '{}/'",
                    source.route
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay (arrays included) replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize, normalize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let mut config: SiteConfig = merged.try_into()?;
    config.normalize();
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when it is missing.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    if overlay.is_none() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `docnav.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docnav Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Arrays ([[categories]], [[sidebars]]) replace the defaults as a whole.
# Unknown keys will cause an error.

# Filename suffix that marks a page. `index<suffix>` is a directory's landing page.
suffix = ".md"

# Directory levels expanded below each category. 0 lists only the category's
# own pages; deeper directories are left out of the sidebar.
max_depth = 2

# ---------------------------------------------------------------------------
# Categories
# ---------------------------------------------------------------------------
# Known category directories, in display order. Directories not listed here
# keep their title-cased name and follow alphabetically.

[[categories]]
key = "ai_integration"
label = "AI Integration"

[[categories]]
key = "design_standards"
label = "Design Standards"

[[categories]]
key = "messages"
label = "Messages"

[[categories]]
key = "platform_adapters"
label = "Platform Adapters"

[[categories]]
key = "plugin_system"
label = "Plugin System"

[[categories]]
key = "learning_system"
label = "Learning System"

[[categories]]
key = "storage_utils"
label = "Storage Utils"

[[categories]]
key = "api"
label = "API"

# ---------------------------------------------------------------------------
# Sidebars
# ---------------------------------------------------------------------------
# One entry per documentation root. `dir` is relative to the docs root given
# with --root; `route` is the URL prefix its pages are published under
# ("" for the site root, otherwise starting with "/").

[[sidebars]]
route = ""
dir = "."
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.suffix, ".md");
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.categories, CategoryTable::default());
        assert_eq!(config.sidebars, vec![SidebarSource::default()]);
        config.validate().unwrap();
    }

    #[test]
    fn stock_template_matches_defaults() {
        let parsed: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let config: SiteConfig = toml::from_str("max_depth = 4").unwrap();
        assert_eq!(config.max_depth, 4);
        // Default values preserved
        assert_eq!(config.suffix, ".md");
        assert_eq!(config.categories, CategoryTable::default());
    }

    #[test]
    fn categories_array_replaces_defaults() {
        let overlay: toml::Value = toml::from_str(
            r#"
[[categories]]
key = "guides"
label = "Guides"
"#,
        )
        .unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(
            config.categories.entries(),
            &[Category::new("guides", "Guides")]
        );
    }

    #[test]
    fn sidebars_parsed_and_normalized() {
        let overlay: toml::Value = toml::from_str(
            r#"
[[sidebars]]
route = "/develop/llm/maibot/main/"
dir = "develop/llm/maibot/main"

[[sidebars]]
route = "/"
dir = "."
"#,
        )
        .unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.sidebars[0].route, "/develop/llm/maibot/main");
        assert_eq!(config.sidebars[0].dir, PathBuf::from("develop/llm/maibot/main"));
        assert_eq!(config.sidebars[1].route, "");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "suffix = \".markdown\"\nmax_depth = 1\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.suffix, ".markdown");
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.sidebars, vec![SidebarSource::default()]);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "max_depth = [").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("max_depth = 2\nsuffix = \".md\"").unwrap();
        let overlay: toml::Value = toml::from_str("max_depth = 5").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["max_depth"].as_integer(), Some(5));
        assert_eq!(merged["suffix"].as_str(), Some(".md"));
    }

    #[test]
    fn merge_toml_nested_tables() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\ny = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[a]\ny = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["a"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("list = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("list = [9]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["list"].as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Unknown keys and validation
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("max_dept = 3");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_category_field_rejected() {
        let result: Result<SiteConfig, _> =
            toml::from_str("[[categories]]\nkey = \"a\"\nlabel = \"A\"\norder = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_suffix() {
        for bad in ["", ".", "md"] {
            let config = SiteConfig {
                suffix: bad.to_string(),
                ..SiteConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Validation(_))),
                "suffix {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn validate_max_depth_limit() {
        let ok = SiteConfig {
            max_depth: MAX_DEPTH_LIMIT,
            ..SiteConfig::default()
        };
        assert!(ok.validate().is_ok());
        let too_deep = SiteConfig {
            max_depth: MAX_DEPTH_LIMIT + 1,
            ..SiteConfig::default()
        };
        assert!(too_deep.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_category_key() {
        let config = SiteConfig {
            categories: CategoryTable::new(vec![Category::new("plugin_system/api", "API")]),
            ..SiteConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("plugin_system/api"));
    }

    #[test]
    fn validate_rejects_duplicate_category() {
        let config = SiteConfig {
            categories: CategoryTable::new(vec![
                Category::new("messages", "Messages"),
                Category::new("messages", "Msgs"),
            ]),
            ..SiteConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate category key"));
    }

    #[test]
    fn validate_rejects_empty_label() {
        let config = SiteConfig {
            categories: CategoryTable::new(vec![Category::new("messages", "  ")]),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_relative_route() {
        let config = SiteConfig {
            sidebars: vec![SidebarSource {
                route: "docs".to_string(),
                dir: PathBuf::from("docs"),
            }],
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_route_after_normalize() {
        let overlay: toml::Value = toml::from_str(
            r#"
[[sidebars]]
route = "/docs"
dir = "a"

[[sidebars]]
route = "/docs/"
dir = "b"
"#,
        )
        .unwrap();
        let err = resolve_config(stock_defaults_value(), Some(overlay)).unwrap_err();
        assert!(err.to_string().contains("duplicate sidebar route '/docs/'"));
    }

    #[test]
    fn validate_rejects_no_sidebars() {
        let config = SiteConfig {
            sidebars: Vec::new(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
