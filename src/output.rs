//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every node is shown by its positional index and label, with its route as
//! secondary context after an arrow. Groups without a landing page have no
//! arrow; their children follow, indented one level:
//!
//! ```text
//! Sidebar /develop/main/
//! 001 Overview → /develop/main/
//! 002 Messages
//!     001 Overview → /develop/main/messages/
//!     002 Formats → /develop/main/messages/formats
//! 003 Snapshots → /develop/main/snapshots/
//!     001 v1.2.0 → /develop/main/snapshots/v1.2.0/
//!         001 Messages
//!             001 Formats → /develop/main/snapshots/v1.2.0/messages/formats
//!
//! Built 1 sidebar: 4 pages, 3 groups
//! ```
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::types::{SidebarItem, SidebarManifest};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a node header: positional index + label, then the link if any.
///
/// ```text
/// 001 Overview → /docs/
/// 002 Messages
/// ```
fn item_line(index: usize, item: &SidebarItem) -> String {
    match &item.link {
        Some(link) => format!("{} {} → {}", format_index(index), item.text, link),
        None => format!("{} {}", format_index(index), item.text),
    }
}

fn format_items(items: &[SidebarItem], depth: usize, lines: &mut Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        lines.push(format!("{}{}", indent(depth), item_line(i + 1, item)));
        format_items(item.children(), depth + 1, lines);
    }
}

/// Number of pages and groups in a tree, at every level.
pub fn count_items(items: &[SidebarItem]) -> (usize, usize) {
    items.iter().fold((0, 0), |(pages, groups), item| {
        let (child_pages, child_groups) = count_items(item.children());
        if item.is_group() {
            (pages + child_pages, groups + 1 + child_groups)
        } else {
            (pages + 1 + child_pages, groups + child_groups)
        }
    })
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Format one sidebar as an indexed tree under a `Sidebar <route>` heading.
pub fn format_sidebar(route: &str, items: &[SidebarItem]) -> Vec<String> {
    let mut lines = vec![format!("Sidebar {route}")];
    format_items(items, 0, &mut lines);
    lines
}

/// Format every sidebar of a run, followed by a totals line.
pub fn format_manifest_output(manifest: &SidebarManifest) -> Vec<String> {
    let mut lines = Vec::new();
    let (mut pages, mut groups) = (0, 0);
    for (route, items) in manifest {
        lines.extend(format_sidebar(route, items));
        lines.push(String::new());
        let (p, g) = count_items(items);
        pages += p;
        groups += g;
    }
    lines.push(format!(
        "Built {}: {}, {}",
        plural(manifest.len(), "sidebar"),
        plural(pages, "page"),
        plural(groups, "group")
    ));
    lines
}

/// Print the manifest display to stdout.
pub fn print_manifest_output(manifest: &SidebarManifest) {
    for line in format_manifest_output(manifest) {
        println!("{}", line);
    }
}
