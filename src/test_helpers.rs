//! Shared test utilities for the docnav test suite.
//!
//! Provides fixture builders for documentation trees, lookup helpers and shape
//! assertions over built sidebars.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = docs_tree(&["index.md", "guides/setup.md", "guides/advanced/tuning.md"]);
//! let items = builder().build_dir_items(tmp.path(), "/docs", 0);
//!
//! assert_eq!(texts(&items), vec!["Overview", "Guides"]);
//! assert_shape(&items, &[("Overview", &[]), ("Guides", &["Setup", "Advanced"])]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::categories::CategoryTable;
use crate::sidebar::SidebarBuilder;
use crate::types::SidebarItem;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory containing the given relative paths.
///
/// Paths ending in `/` become empty directories; everything else becomes a
/// file (parents are created as needed) with a one-line heading as content.
pub fn docs_tree(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    add_paths(tmp.path(), paths);
    tmp
}

/// Add more paths under an existing root, same rules as [`docs_tree`].
pub fn add_paths(root: &Path, paths: &[&str]) {
    for rel in paths {
        let full = root.join(rel.trim_end_matches('/'));
        if rel.ends_with('/') {
            std::fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&full, format!("# {rel}\n")).unwrap();
        }
    }
}

/// Builder with the stock category table, `.md` pages and depth 2.
pub fn builder() -> SidebarBuilder {
    SidebarBuilder::new(CategoryTable::default())
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a direct child by label. Panics if not found.
pub fn find_item<'a>(items: &'a [SidebarItem], text: &str) -> &'a SidebarItem {
    items.iter().find(|i| i.text == text).unwrap_or_else(|| {
        let available = texts(items);
        panic!("item '{text}' not found. Available: {available:?}")
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Labels in display order.
pub fn texts(items: &[SidebarItem]) -> Vec<&str> {
    items.iter().map(|i| i.text.as_str()).collect()
}

/// Links in display order (`None` for link-less groups).
pub fn links(items: &[SidebarItem]) -> Vec<Option<&str>> {
    items.iter().map(|i| i.link.as_deref()).collect()
}

// =========================================================================
// Shape assertions
// =========================================================================

/// Assert labels of the top level and of each node's direct children.
///
/// Each entry is `(text, child_texts)`. Use `&[]` for pages.
pub fn assert_shape(items: &[SidebarItem], expected: &[(&str, &[&str])]) {
    let expected_texts: Vec<&str> = expected.iter().map(|(t, _)| *t).collect();
    assert_eq!(texts(items), expected_texts, "top-level labels mismatch");

    for (text, children) in expected {
        let item = find_item(items, text);
        assert_eq!(
            texts(item.children()),
            children.to_vec(),
            "children of '{text}' mismatch"
        );
    }
}

/// Walk the whole tree and assert that no group has an empty `items`.
pub fn assert_no_empty_groups(items: &[SidebarItem]) {
    for item in items {
        if let Some(children) = &item.items {
            assert!(!children.is_empty(), "'{}' is an empty group", item.text);
            assert_no_empty_groups(children);
        }
    }
}
