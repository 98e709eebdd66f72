// src/extract/mod.rs

//! Post extraction from rendered profile markup.
//!
//! Extraction is best-effort by design: the upstream page is adversarial,
//! frequently-changing third-party UI, so a failed lookup degrades to the
//! next strategy in the cascade instead of erroring, and a run that finds
//! nothing simply yields `None`.

mod cascade;
mod media;

pub use cascade::{ContainerCascade, ContainerStrategy, ContentCascade};
pub use media::MediaScanner;

use scraper::Html;

use crate::error::Result;
use crate::models::{ExtractConfig, Post};
use crate::utils::text::normalize_whitespace;

/// Extracts the most recent post from a rendered page.
pub struct Extractor {
    containers: ContainerCascade,
    contents: ContentCascade,
    media: MediaScanner,
    origin: String,
}

impl Extractor {
    /// Build an extractor, parsing all configured selectors up front.
    pub fn new(config: &ExtractConfig, origin: &str) -> Result<Self> {
        Ok(Self {
            containers: ContainerCascade::new(
                &config.container_selectors,
                &config.container_class_keywords,
            )?,
            contents: ContentCascade::new(&config.content_selectors)?,
            media: MediaScanner::new()?,
            origin: origin.to_string(),
        })
    }

    /// Extract the newest post from raw markup.
    ///
    /// Returns `None` when no container matches any strategy, or when the
    /// matched container yields neither text nor media. The post is simply
    /// discarded for this run, never retried.
    pub fn extract(&self, raw_page: &str) -> Option<Post> {
        let document = Html::parse_document(raw_page);

        let candidate = self.containers.find(&document)?;

        let text = match self.contents.find(&candidate) {
            Some(element) => normalize_whitespace(&element.text().collect::<String>()),
            // No content wrapper matched: flatten all descendant text.
            None => normalize_whitespace(&candidate.text().collect::<String>()),
        };

        // Media extraction is independent of text and always attempted.
        let media_refs = self.media.scan(&candidate, &self.origin);

        Post::new(text, media_refs)
    }
}
