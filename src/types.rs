//! Shared types produced by the sidebar builders.
//!
//! These are serialized to JSON and handed to the site framework, so field
//! names follow its sidebar schema (`text`, `link`, `items`, `collapsed`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in the navigation tree.
///
/// - A node with non-empty `items` is a **group**.
/// - A node with only `link` is a **page**.
///
/// `collapsed` only matters for groups; the builders never set it on pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Display label.
    pub text: String,
    /// Route path. Pages always have one; groups only when backed by an index page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Children in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SidebarItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl SidebarItem {
    /// A leaf page linking to `link`.
    pub fn page(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            items: None,
            collapsed: None,
        }
    }

    /// A collapsed group. Callers must not pass an empty `items`.
    pub fn group(text: impl Into<String>, link: Option<String>, items: Vec<SidebarItem>) -> Self {
        debug_assert!(!items.is_empty(), "groups must have children");
        Self {
            text: text.into(),
            link,
            items: Some(items),
            collapsed: Some(true),
        }
    }

    pub fn is_group(&self) -> bool {
        self.items.as_ref().is_some_and(|items| !items.is_empty())
    }

    pub fn is_page(&self) -> bool {
        self.link.is_some() && !self.is_group()
    }

    /// Child nodes, or an empty slice for pages.
    pub fn children(&self) -> &[SidebarItem] {
        self.items.as_deref().unwrap_or(&[])
    }
}

/// All sidebars for one run, keyed by route (`"/route/"`).
///
/// A `BTreeMap` keeps the serialized key order stable across runs.
pub type SidebarManifest = BTreeMap<String, Vec<SidebarItem>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_serializes_without_optional_fields() {
        let item = SidebarItem::page("Alpha", "/docs/alpha");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"text":"Alpha","link":"/docs/alpha"}"#);
    }

    #[test]
    fn group_serializes_collapsed_and_items() {
        let item = SidebarItem::group(
            "Guides",
            None,
            vec![SidebarItem::page("Setup", "/docs/guides/setup")],
        );
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"text":"Guides","items":[{"text":"Setup","link":"/docs/guides/setup"}],"collapsed":true}"#
        );
    }

    #[test]
    fn group_and_page_classification() {
        let page = SidebarItem::page("Alpha", "/a");
        assert!(page.is_page());
        assert!(!page.is_group());
        assert!(page.children().is_empty());

        let group = SidebarItem::group("G", Some("/g/".into()), vec![page.clone()]);
        assert!(group.is_group());
        assert!(!group.is_page());
        assert_eq!(group.children(), &[page]);
    }

    #[test]
    fn deserializes_framework_shape() {
        let json = r#"{"text":"G","items":[{"text":"P","link":"/p"}],"collapsed":true}"#;
        let item: SidebarItem = serde_json::from_str(json).unwrap();
        assert!(item.is_group());
        assert_eq!(item.link, None);
        assert_eq!(item.children()[0].link.as_deref(), Some("/p"));
    }
}
