//! Sidebar construction from a documentation tree.
//!
//! Three builders, each layered on the one before:
//!
//! | Builder | Input | Output |
//! |---------|-------|--------|
//! | [`SidebarBuilder::build_dir_items`] | any directory | its pages and sub-groups, recursively |
//! | [`SidebarBuilder::build_snapshots_sidebar`] | `<root>/snapshots` | one "Snapshots" node with a child per version |
//! | [`SidebarBuilder::build_sidebar`] | a documentation root | Overview + category groups + snapshots |
//!
//! ```text
//! main/                        Overview           → /main/
//! ├── index.md                 Messages
//! ├── messages/                ├── Overview       → /main/messages/
//! │   ├── index.md             └── Formats        → /main/messages/formats
//! │   └── formats.md           Snapshots          → /main/snapshots/
//! └── snapshots/               └── v1.2.0         → /main/snapshots/v1.2.0/
//!     └── v1.2.0/                  └── Messages
//!         └── messages/                └── Formats → /main/snapshots/v1.2.0/messages/formats
//!             └── formats.md
//! ```
//!
//! Every builder is a pure function of the on-disk state: no caches, no
//! accumulators shared across calls, and no errors. Missing directories
//! produce empty results.

mod snapshots;
mod tree;

pub use snapshots::snapshot_versions;

use crate::categories::{CategoryTable, SNAPSHOTS_DIR};
use crate::config::{SidebarSource, SiteConfig};
use crate::types::{SidebarItem, SidebarManifest};
use std::path::Path;

/// Label of the landing-page node.
pub const OVERVIEW_LABEL: &str = "Overview";
/// Label of the node wrapping all versions.
pub const SNAPSHOTS_LABEL: &str = "Snapshots";

pub const DEFAULT_SUFFIX: &str = ".md";
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Builds sidebars with a fixed category table, page suffix and depth limit.
#[derive(Debug, Clone)]
pub struct SidebarBuilder {
    categories: CategoryTable,
    suffix: String,
    max_depth: usize,
}

impl SidebarBuilder {
    pub fn new(categories: CategoryTable) -> Self {
        Self {
            categories,
            suffix: DEFAULT_SUFFIX.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.categories.clone())
            .with_suffix(&config.suffix)
            .with_max_depth(config.max_depth)
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Deepest level whose subdirectories are still expanded. `0` keeps only
    /// the pages of the starting directory.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Full sidebar for one documentation root.
    ///
    /// Always starts with an Overview node, even when the root is missing.
    /// Top-level directories become category groups in table order, then
    /// alphabetically; the snapshots section comes last.
    pub fn build_sidebar(&self, route_base: &str, fs_base: &Path) -> Vec<SidebarItem> {
        let mut items = vec![SidebarItem::page(OVERVIEW_LABEL, format!("{route_base}/"))];
        items.extend(self.category_groups(fs_base, route_base));
        if let Some(snapshots) = self.build_snapshots_sidebar(route_base, fs_base) {
            items.push(snapshots);
        }

        tracing::debug!(
            route = route_base,
            dir = %fs_base.display(),
            top_level = items.len(),
            "Built sidebar"
        );
        items
    }

    /// One group per non-empty category directory of `dir`, in category order.
    ///
    /// Shared by the root assembler and each snapshot version, which have the
    /// same `category/` layout.
    fn category_groups(&self, dir: &Path, route_prefix: &str) -> Vec<SidebarItem> {
        let names: Vec<String> = crate::scan::list_subdirs(dir)
            .into_iter()
            .filter(|name| name != SNAPSHOTS_DIR)
            .collect();

        self.categories
            .order(&names)
            .into_iter()
            .filter_map(|name| {
                let children =
                    self.build_dir_items(&dir.join(&name), &format!("{route_prefix}/{name}"), 0);
                if children.is_empty() {
                    return None;
                }
                Some(SidebarItem::group(
                    self.categories.label_for(&name),
                    None,
                    children,
                ))
            })
            .collect()
    }
}

/// Build every configured sidebar, keyed by `"<route>/"`.
///
/// Source directories are resolved against `docs_root`.
pub fn build_manifest(
    builder: &SidebarBuilder,
    sources: &[SidebarSource],
    docs_root: &Path,
) -> SidebarManifest {
    sources
        .iter()
        .map(|source| {
            let fs_base = docs_root.join(&source.dir);
            let items = builder.build_sidebar(&source.route, &fs_base);
            (format!("{}/", source.route), items)
        })
        .collect()
}
