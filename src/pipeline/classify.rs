// src/pipeline/classify.rs

//! Content classification.

use crate::models::ContentType;
use crate::utils::url::path_of;

/// Path suffixes that mark a media URL as video.
const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".avi", ".mov", ".webm"];

/// Classify a post by its media references.
///
/// Pure function: `Video` if any URL's path suffix matches a known video
/// extension (query strings ignored), else `Text`. A post with no media
/// is always `Text`.
pub fn classify(media_refs: &[String]) -> ContentType {
    let is_video = media_refs.iter().any(|url| {
        let path = path_of(url);
        VIDEO_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
    });

    if is_video {
        ContentType::Video
    } else {
        ContentType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_media_is_text() {
        assert_eq!(classify(&[]), ContentType::Text);
    }

    #[test]
    fn test_images_are_text() {
        assert_eq!(
            classify(&refs(&[
                "https://t.co/a.jpg",
                "https://t.co/b.png",
                "https://t.co/c.gif",
            ])),
            ContentType::Text
        );
    }

    #[test]
    fn test_any_video_extension_wins() {
        for ext in ["mp4", "avi", "mov", "webm"] {
            let url = format!("https://t.co/clip.{ext}");
            assert_eq!(
                classify(&refs(&["https://t.co/a.jpg", &url])),
                ContentType::Video,
                "extension {ext}"
            );
        }
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert_eq!(
            classify(&refs(&["https://t.co/CLIP.MP4"])),
            ContentType::Video
        );
    }

    #[test]
    fn test_query_string_does_not_hide_video() {
        assert_eq!(
            classify(&refs(&["https://t.co/clip.webm?sig=abc&x=1"])),
            ContentType::Video
        );
    }

    #[test]
    fn test_video_extension_in_query_is_ignored() {
        assert_eq!(
            classify(&refs(&["https://t.co/page.html?next=clip.mp4"])),
            ContentType::Text
        );
    }
}
