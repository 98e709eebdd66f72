// src/models/post.rs

//! Extracted post data structure.

use serde::{Deserialize, Serialize};

use super::identity::compute_identity;

/// Content classification for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Text,
    Video,
}

impl ContentType {
    /// Display tag used in the notification message.
    pub fn tag(&self) -> &'static str {
        match self {
            ContentType::Text => "文字",
            ContentType::Video => "影片",
        }
    }
}

/// A single post extracted from the monitored profile.
///
/// Transient: owned by one pipeline run, never persisted as-is (only the
/// identity and text survive into the store).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Stable deduplication key, a pure function of `text`
    pub identity: String,

    /// Normalized, whitespace-trimmed text content (may be empty for
    /// media-only posts)
    pub text: String,

    /// Absolute media URLs in document order; duplicates permitted
    pub media_refs: Vec<String>,
}

impl Post {
    /// Build a post from already-normalized text and media references.
    ///
    /// Returns `None` when both text and media are empty: such a value
    /// carries no content and is treated as an extraction failure.
    pub fn new(text: String, media_refs: Vec<String>) -> Option<Self> {
        if text.is_empty() && media_refs.is_empty() {
            return None;
        }

        Some(Self {
            identity: compute_identity(&text),
            text,
            media_refs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_post_is_not_constructible() {
        assert!(Post::new(String::new(), Vec::new()).is_none());
    }

    #[test]
    fn test_media_only_post_is_valid() {
        let post = Post::new(String::new(), vec!["https://t.co/a.jpg".into()]).unwrap();
        assert!(post.text.is_empty());
        assert_eq!(post.media_refs.len(), 1);
    }

    #[test]
    fn test_identity_ignores_media() {
        let a = Post::new("same text".into(), vec!["https://t.co/a.jpg".into()]).unwrap();
        let b = Post::new("same text".into(), vec!["https://t.co/b.mp4".into()]).unwrap();
        assert_eq!(a.identity, b.identity);
    }

    #[test]
    fn test_media_order_is_preserved() {
        let refs = vec![
            "https://t.co/1.jpg".to_string(),
            "https://t.co/2.jpg".to_string(),
            "https://t.co/1.jpg".to_string(),
        ];
        let post = Post::new("t".into(), refs.clone()).unwrap();
        assert_eq!(post.media_refs, refs);
    }
}
