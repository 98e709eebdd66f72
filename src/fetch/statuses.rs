// src/fetch/statuses.rs

//! Fallback structured statuses endpoint.
//!
//! When the render path fails, the site's Mastodon-style statuses API can
//! return the latest post as typed JSON, bypassing HTML extraction
//! entirely. Disabled unless a statuses URL is configured.

use std::time::Duration;

use scraper::Html;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::Post;
use crate::utils::text::normalize_whitespace;

/// One status entry as returned by the feed.
#[derive(Debug, Deserialize)]
struct Status {
    /// Post body as an HTML fragment
    #[serde(default)]
    content: String,

    #[serde(default)]
    media_attachments: Vec<MediaAttachment>,
}

#[derive(Debug, Deserialize)]
struct MediaAttachment {
    url: Option<String>,
    preview_url: Option<String>,
}

/// Client for the structured statuses endpoint.
pub struct StatusFeed {
    client: reqwest::Client,
    url: String,
}

impl StatusFeed {
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Fetch the latest status and convert it into a [`Post`] directly.
    pub async fn latest(&self) -> Result<Option<Post>> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::fetch(&self.url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::fetch(
                &self.url,
                format!("statuses endpoint returned {status}"),
            ));
        }

        let statuses: Vec<Status> = resp
            .json()
            .await
            .map_err(|e| AppError::fetch(&self.url, e))?;

        Ok(statuses.into_iter().next().and_then(status_to_post))
    }
}

fn status_to_post(status: Status) -> Option<Post> {
    let text = normalize_whitespace(&flatten_html(&status.content));

    let media_refs = status
        .media_attachments
        .into_iter()
        .filter_map(|m| m.url.or(m.preview_url))
        .collect();

    Post::new(text, media_refs)
}

/// Flatten an HTML fragment to its text content.
fn flatten_html(fragment: &str) -> String {
    Html::parse_fragment(fragment)
        .root_element()
        .text()
        .collect()
}
