//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
///
/// Everything here is a tunable with a sensible default; secrets (API keys
/// and channel tokens) are environment-only and live in [`crate::config::Secrets`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Page fetching and rendering settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Post extraction cascade settings
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Translation API settings
    #[serde(default)]
    pub translate: TranslateConfig,

    /// Notification channel settings
    #[serde(default)]
    pub notify: NotifyConfig,

    /// Durable store settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// User-visible message templates
    #[serde(default)]
    pub messages: MessageTemplates,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.profile_url.trim().is_empty() {
            return Err(AppError::config("fetch.profile_url is empty"));
        }
        if self.fetch.origin.trim().is_empty() {
            return Err(AppError::config("fetch.origin is empty"));
        }
        if self.fetch.user_agents.is_empty() {
            return Err(AppError::config("fetch.user_agents must not be empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::config("fetch.timeout_secs must be > 0"));
        }
        if self.extract.container_selectors.is_empty()
            && self.extract.container_class_keywords.is_empty()
        {
            return Err(AppError::config(
                "extract: at least one container selector or class keyword is required",
            ));
        }
        if self.extract.content_selectors.is_empty() {
            return Err(AppError::config(
                "extract.content_selectors must not be empty",
            ));
        }
        Ok(())
    }
}

/// Page fetching and rendering behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Profile page to monitor
    #[serde(default = "defaults::profile_url")]
    pub profile_url: String,

    /// Site origin used to absolutize relative media URLs
    #[serde(default = "defaults::origin")]
    pub origin: String,

    /// Base URL of the browserless-compatible rendering service
    #[serde(default = "defaults::render_url")]
    pub render_url: String,

    /// Optional token for the rendering service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_token: Option<String>,

    /// Optional structured statuses endpoint used as a fallback when
    /// rendering fails (returns posts directly, bypassing extraction)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses_url: Option<String>,

    /// User-Agent pool; one entry is picked at random per fetch
    #[serde(default = "defaults::user_agents")]
    pub user_agents: Vec<String>,

    /// Overall request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Post-navigation settle wait in milliseconds (client-side rendering)
    #[serde(default = "defaults::settle_ms")]
    pub settle_ms: u64,

    /// Selector that must appear before the page counts as rendered
    #[serde(default = "defaults::ready_selector")]
    pub ready_selector: String,

    /// How long to wait for the readiness selector, in milliseconds
    #[serde(default = "defaults::ready_timeout_ms")]
    pub ready_timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            profile_url: defaults::profile_url(),
            origin: defaults::origin(),
            render_url: defaults::render_url(),
            render_token: None,
            statuses_url: None,
            user_agents: defaults::user_agents(),
            timeout_secs: defaults::timeout(),
            settle_ms: defaults::settle_ms(),
            ready_selector: defaults::ready_selector(),
            ready_timeout_ms: defaults::ready_timeout_ms(),
        }
    }
}

/// Extraction cascade settings.
///
/// The upstream markup is third-party and drifts across deployments, so
/// every selector is configurable, ordered most-specific first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Post-container selectors, tried in order, first match wins
    #[serde(default = "defaults::container_selectors")]
    pub container_selectors: Vec<String>,

    /// Last-resort container matching: any element whose class attribute
    /// contains one of these substrings (case-insensitive)
    #[serde(default = "defaults::container_class_keywords")]
    pub container_class_keywords: Vec<String>,

    /// Content selectors within the candidate container, tried in order
    #[serde(default = "defaults::content_selectors")]
    pub content_selectors: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            container_selectors: defaults::container_selectors(),
            container_class_keywords: defaults::container_class_keywords(),
            content_selectors: defaults::content_selectors(),
        }
    }
}

/// Translation API settings (OpenAI-compatible chat endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// API base URL
    #[serde(default = "defaults::translate_base_url")]
    pub base_url: String,

    /// Chat model name
    #[serde(default = "defaults::translate_model")]
    pub model: String,

    /// System prompt driving the translation
    #[serde(default = "defaults::translate_system_prompt")]
    pub system_prompt: String,

    /// Sampling temperature
    #[serde(default = "defaults::translate_temperature")]
    pub temperature: f32,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::translate_base_url(),
            model: defaults::translate_model(),
            system_prompt: defaults::translate_system_prompt(),
            temperature: defaults::translate_temperature(),
        }
    }
}

/// Notification channel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// LINE Messaging API base URL
    #[serde(default = "defaults::notify_base_url")]
    pub base_url: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::notify_base_url(),
        }
    }
}

/// Durable store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding posts.json and the first-run sentinel
    #[serde(default = "defaults::data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: defaults::data_dir(),
        }
    }
}

/// Message templates for group-facing text.
///
/// Supported placeholders per template are documented on each field;
/// unknown placeholders are left verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageTemplates {
    /// First-run startup announcement (no placeholders)
    #[serde(default = "defaults::msg_startup")]
    pub startup: String,

    /// First-run "no post found" announcement (no placeholders)
    #[serde(default = "defaults::msg_no_post")]
    pub no_post: String,

    /// First-run scrape diagnostic: `{id}`, `{preview}`, `{media_count}`
    #[serde(default = "defaults::msg_first_scrape")]
    pub first_scrape: String,

    /// Content notification: `{kind}`, `{original}`, `{translated}`
    #[serde(default = "defaults::msg_post")]
    pub post: String,

    /// Media links section appended when media is present: `{links}`
    #[serde(default = "defaults::msg_media_section")]
    pub media_section: String,

    /// Substitute used when translation fails: `{text}`
    #[serde(default = "defaults::msg_translation_fallback")]
    pub translation_fallback: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            startup: defaults::msg_startup(),
            no_post: defaults::msg_no_post(),
            first_scrape: defaults::msg_first_scrape(),
            post: defaults::msg_post(),
            media_section: defaults::msg_media_section(),
            translation_fallback: defaults::msg_translation_fallback(),
        }
    }
}

mod defaults {
    // Fetch defaults
    pub fn profile_url() -> String {
        "https://truthsocial.com/@realDonaldTrump".into()
    }
    pub fn origin() -> String {
        "https://truthsocial.com".into()
    }
    pub fn render_url() -> String {
        "http://localhost:3000".into()
    }
    pub fn user_agents() -> Vec<String> {
        vec![
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36".into(),
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36".into(),
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36".into(),
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15".into(),
        ]
    }
    pub fn timeout() -> u64 {
        60
    }
    pub fn settle_ms() -> u64 {
        5_000
    }
    pub fn ready_selector() -> String {
        "article.status-card, div.status-wrapper".into()
    }
    pub fn ready_timeout_ms() -> u64 {
        20_000
    }

    // Extract defaults
    pub fn container_selectors() -> Vec<String> {
        vec![
            "article.status-card".into(),
            "div.status-wrapper".into(),
            "article".into(),
        ]
    }
    pub fn container_class_keywords() -> Vec<String> {
        vec!["status".into(), "post".into()]
    }
    pub fn content_selectors() -> Vec<String> {
        vec![
            "div.status-content".into(),
            "div.status-body".into(),
            "p".into(),
        ]
    }

    // Translate defaults
    pub fn translate_base_url() -> String {
        "https://api.deepseek.com".into()
    }
    pub fn translate_model() -> String {
        "deepseek-chat".into()
    }
    pub fn translate_system_prompt() -> String {
        "你是一個專業翻譯，請將以下英文文本翻譯成中文。保持原意，使語言流暢自然。".into()
    }
    pub fn translate_temperature() -> f32 {
        0.3
    }

    // Notify defaults
    pub fn notify_base_url() -> String {
        "https://api.line.me".into()
    }

    // Storage defaults
    pub fn data_dir() -> String {
        "data".into()
    }

    // Message defaults
    pub fn msg_startup() -> String {
        "🤖 Trump 監控機器人首次啟動，正在檢查 Truth Social...".into()
    }
    pub fn msg_no_post() -> String {
        "🔍 首次爬取沒有找到任何貼文，可能是網頁結構變化或者爬蟲問題。".into()
    }
    pub fn msg_first_scrape() -> String {
        "✅ 首次爬取成功！找到貼文！\n\nID: {id}\n\n內容: {preview}\n\n媒體數量: {media_count}"
            .into()
    }
    pub fn msg_post() -> String {
        "🔔 Trump 在 Truth Social 有新動態！\n\n📝 類型: {kind}\n\n🇺🇸 原文:\n{original}\n\n🇹🇼 中文翻譯:\n{translated}"
            .into()
    }
    pub fn msg_media_section() -> String {
        "\n\n🖼️ 媒體連結:\n{links}".into()
    }
    pub fn msg_translation_fallback() -> String {
        "[翻譯錯誤] 原文: {text}".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agents() {
        let mut config = Config::default();
        config.fetch.user_agents.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.fetch.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_cascade() {
        let mut config = Config::default();
        config.extract.container_selectors.clear();
        config.extract.container_class_keywords.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn defaults_order_specific_first() {
        let extract = ExtractConfig::default();
        assert_eq!(extract.container_selectors[0], "article.status-card");
        assert_eq!(
            extract.container_selectors.last().map(String::as_str),
            Some("article")
        );
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.translate.model, "deepseek-chat");
    }
}
