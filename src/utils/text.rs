// src/utils/text.rs

//! Text normalization helpers.

use unicode_segmentation::UnicodeSegmentation;

/// Collapse runs of whitespace into single spaces and trim the result.
///
/// This is the canonical normalization applied to extracted post text
/// before identity computation, so the identity is insensitive to
/// whitespace-only markup changes.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max` grapheme clusters, appending an ellipsis if
/// anything was cut. Safe for CJK and emoji content.
pub fn truncate_graphemes(s: &str, max: usize) -> String {
    let mut clusters = s.grapheme_indices(true);
    match clusters.nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_whitespace("  a \n\t b   c "), "a b c");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_whitespace("  \n  "), "");
    }

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_graphemes("hello", 10), "hello");
        assert_eq!(truncate_graphemes("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_graphemes("hello world", 5), "hello...");
    }

    #[test]
    fn test_truncate_cjk() {
        assert_eq!(truncate_graphemes("重大announcement", 2), "重大...");
    }
}
