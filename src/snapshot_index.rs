//! Snapshot bundles and the landing page for the `snapshots/` directory.
//!
//! [`create_snapshot`] freezes the current docs of a sidebar root into
//! `snapshots/<tag>/`.
//!
//! The "Snapshots" sidebar node links to `<route>/snapshots/`, which needs an
//! `index.md` to resolve. This module renders that page as a plain list of
//! versions, in the same order the sidebar uses:
//!
//! ```markdown
//! # Documentation Snapshots
//!
//! Documentation archived per release tag of `Mai-with-u/MaiBot`.
//!
//! - [v1.2.0](/docs/snapshots/v1.2.0/)
//! - [v1.1.0](/docs/snapshots/v1.1.0/)
//! ```

use crate::categories::SNAPSHOTS_DIR;
use crate::naming;
use crate::sidebar::snapshot_versions;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Render the snapshots landing page for `versions` (already in display order).
///
/// `repo_label` names the tracked repository in the intro line when given.
pub fn render_snapshot_index(route_base: &str, versions: &[String], repo_label: Option<&str>) -> String {
    let mut lines = vec!["# Documentation Snapshots".to_string(), String::new()];
    match repo_label {
        Some(repo) => lines.push(format!(
            "Documentation archived per release tag of `{repo}`."
        )),
        None => lines.push("Documentation archived per release tag.".to_string()),
    }
    lines.push(String::new());
    for version in versions {
        lines.push(format!(
            "- [{version}]({route_base}/{SNAPSHOTS_DIR}/{version}/)"
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Write `fs_base/snapshots/index<suffix>`, listing its versions.
///
/// Returns the written path, or `None` when `fs_base` has no snapshots
/// directory (nothing is created in that case).
pub fn write_snapshot_index(
    route_base: &str,
    fs_base: &Path,
    suffix: &str,
    repo_label: Option<&str>,
) -> std::io::Result<Option<PathBuf>> {
    let snapshots_dir = fs_base.join(SNAPSHOTS_DIR);
    if !snapshots_dir.is_dir() {
        return Ok(None);
    }
    let versions = snapshot_versions(&snapshots_dir);
    let content = render_snapshot_index(route_base, &versions, repo_label);
    let path = snapshots_dir.join(naming::index_file_name(suffix));
    fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), versions = versions.len(), "Wrote snapshot index");
    Ok(Some(path))
}

/// Copy every entry of `fs_base` except `snapshots/` into
/// `fs_base/snapshots/<tag>/`, then rewrite the snapshots index.
///
/// An existing snapshot with the same tag is replaced. `tag` must be a single
/// visible path segment. Returns the snapshot directory.
pub fn create_snapshot(
    route_base: &str,
    fs_base: &Path,
    tag: &str,
    suffix: &str,
    repo_label: Option<&str>,
) -> io::Result<PathBuf> {
    if tag.is_empty() || tag.contains(['/', '\\']) || naming::is_hidden(tag) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid snapshot tag: {tag:?}"),
        ));
    }
    if !fs_base.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("docs directory not found: {}", fs_base.display()),
        ));
    }

    let snapshot_dir = fs_base.join(SNAPSHOTS_DIR).join(tag);
    if snapshot_dir.exists() {
        tracing::warn!(path = %snapshot_dir.display(), "Replacing existing snapshot");
        fs::remove_dir_all(&snapshot_dir)?;
    }
    fs::create_dir_all(&snapshot_dir)?;

    let walker = WalkDir::new(fs_base)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.depth() == 1 && e.file_name() == SNAPSHOTS_DIR));

    let mut copied = 0usize;
    for entry in walker {
        let entry = entry?;
        let rel = entry.path().strip_prefix(fs_base).map_err(io::Error::other)?;
        let target = snapshot_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    tracing::debug!(path = %snapshot_dir.display(), files = copied, "Created snapshot");

    write_snapshot_index(route_base, fs_base, suffix, repo_label)?;
    Ok(snapshot_dir)
}
