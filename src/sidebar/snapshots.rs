//! Versioned documentation bundles under `snapshots/`.
//!
//! ```text
//! <root>/snapshots/
//! ├── index.md             (landing page, see crate::snapshot_index)
//! ├── v1.2.0/
//! │   ├── messages/        category, same layout as the root
//! │   └── plugin_system/
//! └── v1.1.0/
//! ```
//!
//! Versions are listed newest-looking first by a plain descending string sort.
//! That is only right while names sort like their release order: `v10` lands
//! after `v9`. Names are kept as-is rather than parsed as versions.

use super::{SNAPSHOTS_LABEL, SidebarBuilder};
use crate::categories::SNAPSHOTS_DIR;
use crate::scan;
use crate::types::SidebarItem;
use std::path::Path;

/// Version directory names of `snapshots_dir`, descending. Empty if missing.
pub fn snapshot_versions(snapshots_dir: &Path) -> Vec<String> {
    let mut versions = scan::list_subdirs(snapshots_dir);
    versions.sort_by(|a, b| b.cmp(a));
    versions
}

impl SidebarBuilder {
    /// The "Snapshots" node for `fs_base/snapshots`, or `None` if there is no
    /// such directory.
    ///
    /// Each version links to `<route_base>/snapshots/<version>/` and holds one
    /// collapsed group per non-empty category, ordered like the root's
    /// categories. A version (or the whole section) with nothing to list is
    /// kept as a plain link rather than an empty group.
    pub fn build_snapshots_sidebar(&self, route_base: &str, fs_base: &Path) -> Option<SidebarItem> {
        let snapshots_dir = fs_base.join(SNAPSHOTS_DIR);
        if !snapshots_dir.is_dir() {
            return None;
        }
        let snapshots_route = format!("{route_base}/{SNAPSHOTS_DIR}");

        let versions: Vec<SidebarItem> = snapshot_versions(&snapshots_dir)
            .into_iter()
            .map(|version| {
                let version_route = format!("{snapshots_route}/{version}");
                let groups = self.category_groups(&snapshots_dir.join(&version), &version_route);
                linked_node(version, format!("{version_route}/"), groups)
            })
            .collect();

        tracing::debug!(
            route = route_base,
            versions = versions.len(),
            "Built snapshots sidebar"
        );
        Some(linked_node(
            SNAPSHOTS_LABEL.to_string(),
            format!("{snapshots_route}/"),
            versions,
        ))
    }
}

/// A collapsed group with a link, or a plain page when there are no children.
fn linked_node(text: String, link: String, items: Vec<SidebarItem>) -> SidebarItem {
    if items.is_empty() {
        SidebarItem::page(text, link)
    } else {
        SidebarItem::group(text, Some(link), items)
    }
}
