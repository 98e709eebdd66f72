// src/extract/media.rs

//! Media reference extraction.

use scraper::{ElementRef, Selector};

use crate::error::Result;
use crate::utils::url::{absolutize, path_of};

use super::cascade::parse_selector;

/// Image formats that are icons/vector art rather than post media.
const ICON_EXTENSIONS: &[&str] = &[".svg", ".ico"];

/// Collects image and video references from a post container.
#[derive(Debug)]
pub struct MediaScanner {
    media_selector: Selector,
}

impl MediaScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            media_selector: parse_selector("img, video, source")?,
        })
    }

    /// Scan all media descendants of the candidate element in document
    /// order. For each element the primary `src` attribute is preferred,
    /// falling back to the lazy-load `data-src`. Icon formats are skipped
    /// and relative paths are absolutized against `origin` exactly once.
    /// Duplicates are preserved.
    pub fn scan(&self, candidate: &ElementRef<'_>, origin: &str) -> Vec<String> {
        candidate
            .select(&self.media_selector)
            .filter_map(|element| {
                element
                    .value()
                    .attr("src")
                    .or_else(|| element.value().attr("data-src"))
            })
            .filter(|src| !src.trim().is_empty())
            .filter(|src| !is_icon(src))
            .map(|src| absolutize(origin, src))
            .collect()
    }
}

fn is_icon(src: &str) -> bool {
    let path = path_of(src);
    ICON_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    const ORIGIN: &str = "https://truthsocial.com";

    fn scan(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let container = parse_selector("article").unwrap();
        let candidate = document.select(&container).next().unwrap();
        MediaScanner::new().unwrap().scan(&candidate, ORIGIN)
    }

    #[test]
    fn test_scan_document_order() {
        let refs = scan(
            r#"<article>
                <img src="/media/1.jpg">
                <video src="/media/2.mp4"></video>
                <img src="/media/3.png">
            </article>"#,
        );
        assert_eq!(
            refs,
            vec![
                "https://truthsocial.com/media/1.jpg",
                "https://truthsocial.com/media/2.mp4",
                "https://truthsocial.com/media/3.png",
            ]
        );
    }

    #[test]
    fn test_scan_prefers_src_over_data_src() {
        let refs = scan(r#"<article><img src="/real.jpg" data-src="/lazy.jpg"></article>"#);
        assert_eq!(refs, vec!["https://truthsocial.com/real.jpg"]);
    }

    #[test]
    fn test_scan_falls_back_to_data_src() {
        let refs = scan(r#"<article><img data-src="/lazy.jpg"></article>"#);
        assert_eq!(refs, vec!["https://truthsocial.com/lazy.jpg"]);
    }

    #[test]
    fn test_scan_skips_icons() {
        let refs = scan(
            r#"<article>
                <img src="/icons/verified.svg">
                <img src="/favicon.ico">
                <img src="/media/photo.jpg">
            </article>"#,
        );
        assert_eq!(refs, vec!["https://truthsocial.com/media/photo.jpg"]);
    }

    #[test]
    fn test_scan_keeps_absolute_urls_untouched() {
        let refs = scan(r#"<article><img src="https://cdn.example.com/a.jpg"></article>"#);
        assert_eq!(refs, vec!["https://cdn.example.com/a.jpg"]);
    }

    #[test]
    fn test_scan_keeps_duplicates() {
        let refs = scan(r#"<article><img src="/a.jpg"><img src="/a.jpg"></article>"#);
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn test_scan_skips_elements_without_source() {
        let refs = scan(r#"<article><img alt="no source"><video></video></article>"#);
        assert!(refs.is_empty());
    }
}
