//! # docnav
//!
//! Derives documentation-site sidebars from the layout of a Markdown tree.
//! The filesystem is the data source: directories become collapsible groups,
//! `index.md` becomes an "Overview" entry, and filenames become labels.
//!
//! # Pipeline
//!
//! ```text
//! docnav.toml ─┐
//!              ├─ config ─→ SidebarBuilder ─→ sidebar::build_manifest ─→ sidebar.json
//! docs/ ───────┘                 │
//!                                └─ scan (one directory level at a time)
//! ```
//!
//! The output is the multi-sidebar object a VitePress-style framework expects:
//! a map from route prefix to an ordered list of `{ text, link, items, collapsed }`
//! nodes. Rendering, search and theming stay with the framework.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`sidebar`] | Directory walker, snapshot expansion and top-level assembly |
//! | [`scan`] | Single-level directory listing: index page, pages, subdirectories |
//! | [`naming`] | Page suffix, `index` detection and title-casing of names |
//! | [`categories`] | Injectable category table: labels and display priority |
//! | [`snapshot_index`] | Creates snapshot bundles and the `snapshots/index.md` landing page |
//! | [`config`] | `docnav.toml` loading, merging and validation |
//! | [`types`] | `SidebarItem` and the per-run `SidebarManifest` |
//! | [`output`] | CLI tree display of built sidebars |
//!
//! # Design Decisions
//!
//! ## Filesystem Order, Not Front Matter
//!
//! Pages sort by filename and directories by name, byte-wise. Nothing is read
//! from inside the pages, so the sidebar is a function of directory listings
//! alone and two runs over the same tree produce identical JSON.
//!
//! ## Categories Are Data
//!
//! Known category directories (`messages`, `plugin_system`, ...) get a fixed
//! position and a nicer label from a [`categories::CategoryTable`]. The table is
//! passed into [`sidebar::SidebarBuilder`] rather than living in a static, so
//! each config file, and each test, brings its own.
//!
//! ## No Empty Groups
//!
//! A directory that contributes nothing (no pages, or everything beyond the
//! depth limit) is dropped instead of rendered as an empty, unclickable group.
//!
//! ## Missing Means Empty
//!
//! The builders never fail. A missing or unreadable directory yields nothing,
//! with a `warn` trace for the unreadable case, so one bad directory cannot
//! break the whole site build. Directory symlinks pointing back up the tree
//! are skipped the same way.

pub mod categories;
pub mod config;
pub mod naming;
pub mod output;
pub mod scan;
pub mod sidebar;
pub mod snapshot_index;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
