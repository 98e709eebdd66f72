// src/fetch/render.rs

//! Rendered-page fetching via a browserless-compatible service.
//!
//! Browser process lifecycle is not this crate's concern: the page is
//! rendered by an external service exposing the `/content` endpoint, which
//! navigates, waits, and returns the final HTML.

use std::time::Duration;

use rand::Rng;
use serde_json::json;

use crate::error::{AppError, Result};
use crate::models::FetchConfig;

/// Client for a browserless-compatible rendering service.
pub struct RenderClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    profile_url: String,
    user_agents: Vec<String>,
    settle_ms: u64,
    ready_selector: String,
    ready_timeout_ms: u64,
}

impl RenderClient {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.render_url.trim_end_matches('/').to_string(),
            token: config.render_token.clone(),
            profile_url: config.profile_url.clone(),
            user_agents: config.user_agents.clone(),
            settle_ms: config.settle_ms,
            ready_selector: config.ready_selector.clone(),
            ready_timeout_ms: config.ready_timeout_ms,
        })
    }

    /// Pick a User-Agent from the pool at random. A fresh identity per
    /// invocation reduces deterministic blocking by the upstream site.
    fn pick_user_agent(&self) -> &str {
        let idx = rand::rng().random_range(0..self.user_agents.len());
        &self.user_agents[idx]
    }

    /// Fetch fully-rendered HTML for the monitored profile page.
    ///
    /// The service waits for the readiness selector before returning; a
    /// page where no recognizable post container appears within the
    /// timeout comes back as an error, never as partial content.
    pub async fn content(&self) -> Result<String> {
        let mut endpoint = format!("{}/content", self.base_url);
        if let Some(ref token) = self.token {
            endpoint.push_str(&format!("?token={token}"));
        }

        let user_agent = self.pick_user_agent();
        log::debug!("Rendering {} (UA: {})", self.profile_url, user_agent);

        let body = json!({
            "url": self.profile_url,
            "userAgent": user_agent,
            "gotoOptions": { "waitUntil": "networkidle2" },
            "waitForSelector": {
                "selector": self.ready_selector,
                "timeout": self.ready_timeout_ms,
            },
            "waitForTimeout": self.settle_ms,
        });

        let resp = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::fetch(&self.profile_url, e))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(AppError::fetch(
                &self.profile_url,
                format!("render service returned {status}: {message}"),
            ));
        }

        let html = resp
            .text()
            .await
            .map_err(|e| AppError::fetch(&self.profile_url, e))?;
        log::debug!("Rendered page: {} bytes", html.len());
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FetchConfig;

    #[test]
    fn test_user_agent_comes_from_pool() {
        let config = FetchConfig::default();
        let client = RenderClient::new(&config).unwrap();

        for _ in 0..20 {
            let ua = client.pick_user_agent().to_string();
            assert!(config.user_agents.contains(&ua));
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = FetchConfig {
            render_url: "http://localhost:3000/".into(),
            ..FetchConfig::default()
        };
        let client = RenderClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
