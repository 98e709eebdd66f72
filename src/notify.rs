// src/notify.rs

//! Push delivery to the LINE group.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::error::{AppError, Result};
use crate::models::NotifyConfig;

/// Trait for notification backends.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one fully-formed text message to the group.
    async fn push(&self, message: &str) -> Result<()>;
}

/// LINE Messaging API push client.
pub struct LinePush {
    http: reqwest::Client,
    base_url: String,
    channel_token: String,
    group_id: String,
}

impl LinePush {
    pub fn new(config: &NotifyConfig, channel_token: &str, group_id: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            channel_token: channel_token.to_string(),
            group_id: group_id.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for LinePush {
    async fn push(&self, message: &str) -> Result<()> {
        let url = format!("{}/v2/bot/message/push", self.base_url);

        let body = json!({
            "to": self.group_id,
            "messages": [{ "type": "text", "text": message }],
        });

        log::debug!("Pushing message ({} chars) to group", message.len());

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.channel_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::notify(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::notify(format!(
                "LINE API returned {status}: {error_text}"
            )));
        }

        log::info!("Message delivered to LINE group");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_payload_shape() {
        let body = json!({
            "to": "Cgroup",
            "messages": [{ "type": "text", "text": "hello" }],
        });
        assert_eq!(body["to"], "Cgroup");
        assert_eq!(body["messages"][0]["type"], "text");
        assert_eq!(body["messages"][0]["text"], "hello");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = LinePush::new(
            &NotifyConfig {
                base_url: "https://api.line.me/".into(),
            },
            "token",
            "group",
        )
        .unwrap();
        assert_eq!(client.base_url, "https://api.line.me");
    }
}
