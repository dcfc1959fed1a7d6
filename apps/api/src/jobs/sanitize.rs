//! Text cleanup for job descriptions coming off the wire.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Removes HTML tags. Remotive descriptions arrive as HTML fragments;
/// matching and previews operate on the visible text.
pub fn strip_html(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Truncates to at most `max_chars` characters, never splitting a char.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
