// src/fetch/mod.rs

//! Fetching the latest post from the monitored profile.
//!
//! The primary path renders the profile page and runs the extraction
//! cascade over the resulting HTML. If rendering fails and a structured
//! statuses endpoint is configured, that endpoint is tried instead and
//! yields a post directly.

pub mod render;
pub mod statuses;

pub use render::RenderClient;
pub use statuses::StatusFeed;

use async_trait::async_trait;

use crate::error::Result;
use crate::extract::Extractor;
use crate::models::{Config, Post};

/// Source of the latest post.
///
/// `Ok(None)` means the page was fetched successfully but contained no
/// extractable post (definitive absence); a transient fetch/render failure
/// is an `Err`. The orchestrator's sentinel policy depends on this
/// distinction.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn latest_post(&self) -> Result<Option<Post>>;
}

/// Production post source: render + extract, with optional API fallback.
pub struct CascadeFetcher {
    render: RenderClient,
    extractor: Extractor,
    fallback: Option<StatusFeed>,
}

impl CascadeFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let fallback = config
            .fetch
            .statuses_url
            .as_deref()
            .map(|url| StatusFeed::new(url, config.fetch.timeout_secs))
            .transpose()?;

        Ok(Self {
            render: RenderClient::new(&config.fetch)?,
            extractor: Extractor::new(&config.extract, &config.fetch.origin)?,
            fallback,
        })
    }
}

#[async_trait]
impl PostSource for CascadeFetcher {
    async fn latest_post(&self) -> Result<Option<Post>> {
        match self.render.content().await {
            Ok(raw_page) => Ok(self.extractor.extract(&raw_page)),
            Err(render_err) => match &self.fallback {
                Some(feed) => {
                    log::warn!("Render path failed ({render_err}), trying statuses endpoint");
                    feed.latest().await
                }
                None => Err(render_err),
            },
        }
    }
}
