//! Single-level directory listing.
//!
//! The sidebar builders never look at more than one directory level at a time;
//! recursion happens one level up in [`crate::sidebar`]. A listing splits the
//! entries of a directory into:
//!
//! - the landing page (`index.md`), if any
//! - other pages (`*.md`), sorted by filename
//! - visible subdirectories, sorted by name
//!
//! ```text
//! guides/
//! ├── index.md          → index
//! ├── alpha.md          → pages[0]
//! ├── beta_two.md       → pages[1]
//! ├── notes.txt         (ignored: not a page)
//! ├── .drafts/          (ignored: hidden)
//! └── advanced/         → subdirs[0]
//! ```
//!
//! ## Failure Model
//!
//! Listing never fails. A missing directory is an empty listing. Any other I/O
//! error (permissions, broken symlinks) is logged at `warn` and the affected
//! entry, or the whole directory, is treated as absent so the rest of the
//! navigation still builds.
//!
//! Symlinks are followed, except a directory link that resolves to the listed
//! directory or one of its ancestors. Expanding it would repeat the tree under
//! a new name.

use crate::naming::{self, ParsedPage};
use std::path::Path;
use walkdir::WalkDir;

/// Entries of one directory, classified and sorted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DirListing {
    /// The `index` page, kept out of `pages`.
    pub index: Option<ParsedPage>,
    /// Non-index pages in ascending filename order.
    pub pages: Vec<ParsedPage>,
    /// Non-hidden subdirectory names in ascending order.
    pub subdirs: Vec<String>,
}

impl DirListing {
    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_none() && self.pages.is_empty() && self.subdirs.is_empty()
    }

    /// Subdirectories other than `excluded`, still in sorted order.
    pub fn subdirs_except<'a>(&'a self, excluded: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.subdirs
            .iter()
            .map(String::as_str)
            .filter(move |name| *name != excluded)
    }
}

/// Kind of a listed entry, after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
}

/// Readable entries of `dir` with UTF-8 names, in byte order of the name.
fn read_entries(dir: &Path) -> Vec<(String, EntryKind)> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut entries = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "Skipping non UTF-8 name");
            continue;
        };
        let file_type = entry.file_type();
        if file_type.is_dir() && entry.path_is_symlink() && links_to_ancestor(dir, entry.path()) {
            tracing::warn!(path = %entry.path().display(), "Skipping symlink to an ancestor directory");
            continue;
        }
        let kind = if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            continue;
        };
        entries.push((name.to_string(), kind));
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

/// Whether the directory symlink `link` resolves to `dir` or above it.
fn links_to_ancestor(dir: &Path, link: &Path) -> bool {
    match (dir.canonicalize(), link.canonicalize()) {
        (Ok(dir), Ok(target)) => dir.starts_with(target),
        _ => false,
    }
}

/// List the immediate entries of `dir`, recognizing pages by `suffix`.
pub fn list_dir(dir: &Path, suffix: &str) -> DirListing {
    let mut listing = DirListing::default();
    for (name, kind) in read_entries(dir) {
        match kind {
            EntryKind::Dir if !naming::is_hidden(&name) => listing.subdirs.push(name),
            EntryKind::Dir => {}
            EntryKind::File => {
                if let Some(page) = naming::parse_page_name(&name, suffix) {
                    if page.is_index {
                        listing.index = Some(page);
                    } else {
                        listing.pages.push(page);
                    }
                }
            }
        }
    }
    listing
}

/// Whether `dir` has a landing page.
pub fn has_index_page(dir: &Path, suffix: &str) -> bool {
    dir.join(naming::index_file_name(suffix)).is_file()
}

/// Visible subdirectory names of `dir`, sorted. Empty if `dir` is missing.
pub fn list_subdirs(dir: &Path) -> Vec<String> {
    read_entries(dir)
        .into_iter()
        .filter(|(name, kind)| *kind == EntryKind::Dir && !naming::is_hidden(name))
        .map(|(name, _)| name)
        .collect()
}
