// src/pipeline/compose.rs

//! Group-facing message composition.
//!
//! Messages are assembled from configurable templates using simple
//! placeholder replacement. Group members only ever see fully-formed
//! messages built here; diagnostic detail stays in operator logs.

use crate::models::{ContentType, MessageTemplates, Post};
use crate::utils::text::truncate_graphemes;

/// Maximum preview length (grapheme clusters) in the first-run diagnostic.
const PREVIEW_GRAPHEMES: usize = 100;

/// Compose the content notification for a text post.
///
/// Layout: header + type tag, original block, translated block, and a
/// newline-joined media-links section when media is present.
pub fn content_message(
    templates: &MessageTemplates,
    post: &Post,
    content_type: ContentType,
    translated: &str,
) -> String {
    let mut message = templates
        .post
        .replace("{kind}", content_type.tag())
        .replace("{original}", &post.text)
        .replace("{translated}", translated);

    if !post.media_refs.is_empty() {
        message.push_str(
            &templates
                .media_section
                .replace("{links}", &post.media_refs.join("\n")),
        );
    }

    message
}

/// Compose the one-time first-scrape diagnostic announcement.
pub fn first_scrape_message(templates: &MessageTemplates, post: &Post) -> String {
    templates
        .first_scrape
        .replace("{id}", &post.identity)
        .replace("{preview}", &truncate_graphemes(&post.text, PREVIEW_GRAPHEMES))
        .replace("{media_count}", &post.media_refs.len().to_string())
}

/// Compose the tagged substitute used when translation fails.
pub fn translation_fallback(templates: &MessageTemplates, text: &str) -> String {
    templates.translation_fallback.replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageTemplates;

    fn post(text: &str, media: &[&str]) -> Post {
        Post::new(
            text.to_string(),
            media.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_content_message_without_media() {
        let templates = MessageTemplates::default();
        let post = post("Hello", &[]);

        let message = content_message(&templates, &post, ContentType::Text, "你好");
        assert!(message.contains("Hello"));
        assert!(message.contains("你好"));
        assert!(message.contains("文字"));
        assert!(!message.contains("媒體連結"));
    }

    #[test]
    fn test_content_message_appends_media_links() {
        let templates = MessageTemplates::default();
        let post = post("Hello", &["https://t.co/a.jpg", "https://t.co/b.jpg"]);

        let message = content_message(&templates, &post, ContentType::Text, "你好");
        assert!(message.contains("https://t.co/a.jpg\nhttps://t.co/b.jpg"));
    }

    #[test]
    fn test_first_scrape_message_truncates_preview() {
        let templates = MessageTemplates::default();
        let long_text = "x".repeat(300);
        let post = post(&long_text, &["https://t.co/a.jpg"]);

        let message = first_scrape_message(&templates, &post);
        assert!(message.contains(&post.identity));
        assert!(message.contains("媒體數量: 1"));
        assert!(!message.contains(&long_text));
        assert!(message.contains(&format!("{}...", "x".repeat(100))));
    }

    #[test]
    fn test_translation_fallback_embeds_original() {
        let templates = MessageTemplates::default();
        let fallback = translation_fallback(&templates, "original words");
        assert_eq!(fallback, "[翻譯錯誤] 原文: original words");
    }
}
