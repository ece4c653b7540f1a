//! Recursive directory → sidebar items.

use super::{OVERVIEW_LABEL, SidebarBuilder};
use crate::categories::SNAPSHOTS_DIR;
use crate::scan;
use crate::types::SidebarItem;
use std::path::Path;

impl SidebarBuilder {
    /// Sidebar items for `dir`, published under `route_prefix`.
    ///
    /// Order is: Overview (when `index.md` exists), then pages by filename, then
    /// one collapsed group per non-empty subdirectory by name. Subdirectories
    /// are only expanded while `depth < max_depth`; `snapshots/` and hidden
    /// directories never are. A group links to `<prefix>/<dir>/` only when the
    /// subdirectory has its own `index.md`.
    pub fn build_dir_items(&self, dir: &Path, route_prefix: &str, depth: usize) -> Vec<SidebarItem> {
        let listing = scan::list_dir(dir, &self.suffix);

        let mut items = Vec::with_capacity(listing.pages.len() + listing.subdirs.len() + 1);
        if listing.has_index() {
            items.push(SidebarItem::page(OVERVIEW_LABEL, format!("{route_prefix}/")));
        }
        items.extend(listing.pages.iter().map(|page| {
            SidebarItem::page(&page.display_title, format!("{route_prefix}/{}", page.stem))
        }));

        if depth >= self.max_depth {
            return items;
        }

        for name in listing.subdirs_except(SNAPSHOTS_DIR) {
            let child_dir = dir.join(name);
            let child_prefix = format!("{route_prefix}/{name}");
            let children = self.build_dir_items(&child_dir, &child_prefix, depth + 1);
            if children.is_empty() {
                continue;
            }
            let link = scan::has_index_page(&child_dir, &self.suffix).then(|| format!("{child_prefix}/"));
            items.push(SidebarItem::group(
                self.categories.label_for(name),
                link,
                children,
            ));
        }
        items
    }
}
