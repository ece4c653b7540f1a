//! Centralized filename conventions for pages and directories.
//!
//! Every entry the walker sees is classified by name alone:
//! - `name.md` is a page whose route segment is the stem (`name`)
//! - `index.md` is the landing page of its directory
//! - names starting with `.` are hidden
//!
//! ## Display Titles
//!
//! Separators (`-` and `_`) become spaces and the first letter of each word is
//! upper-cased. The rest of each word is left alone:
//! - `beta_two.md` → "Beta Two"
//! - `plugin-system/` → "Plugin System"
//! - `getting_started-FAQ.md` → "Getting Started FAQ"

/// Stem of the landing page of a directory.
pub const INDEX_STEM: &str = "index";

/// Result of parsing a page filename like `beta_two.md`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPage {
    /// Filename with the page suffix stripped; used as the route segment.
    pub stem: String,
    /// Title-cased stem.
    pub display_title: String,
    /// Whether this is the directory's `index` page.
    pub is_index: bool,
}

/// Parse a filename as a page, given the page suffix (e.g. `".md"`).
///
/// Returns `None` when the name does not end with the suffix, or when nothing
/// is left once the suffix is stripped:
/// - `"beta_two.md"` → stem="beta_two", display_title="Beta Two"
/// - `"index.md"` → stem="index", is_index=true
/// - `"notes.txt"` → None
/// - `".md"` → None
pub fn parse_page_name(file_name: &str, suffix: &str) -> Option<ParsedPage> {
    let stem = file_name.strip_suffix(suffix)?;
    if stem.is_empty() {
        return None;
    }
    Some(ParsedPage {
        stem: stem.to_string(),
        display_title: display_title(stem),
        is_index: stem == INDEX_STEM,
    })
}

/// Filename of the landing page for the given suffix (`index.md`).
pub fn index_file_name(suffix: &str) -> String {
    format!("{INDEX_STEM}{suffix}")
}

/// Hidden entries start with a dot.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Title-case a file stem or directory name.
///
/// `-` and `_` are replaced by spaces one for one, so `a--b` keeps two spaces.
pub fn display_title(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.chars() {
        match c {
            '-' | '_' => {
                out.push(' ');
                word_start = true;
            }
            c if c.is_whitespace() => {
                out.push(c);
                word_start = true;
            }
            c if word_start => {
                out.extend(c.to_uppercase());
                word_start = false;
            }
            c => out.push(c),
        }
    }
    out
}
