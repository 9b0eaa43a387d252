//! Plain-text preview of stored HTML.

use std::sync::LazyLock;

use regex::Regex;

/// Number of characters shown by `get`.
pub const PREVIEW_CHARS: usize = 200;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Strip tags and keep the first `max_chars` characters.
pub fn preview(html: &str, max_chars: usize) -> String {
    HTML_TAG.replace_all(html, "").chars().take(max_chars).collect()
}
