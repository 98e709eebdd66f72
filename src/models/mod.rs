// src/models/mod.rs

//! Domain models for the monitor application.

mod config;
mod identity;
mod post;

// Re-export all public types
pub use config::{
    Config, ExtractConfig, FetchConfig, MessageTemplates, NotifyConfig, StorageConfig,
    TranslateConfig,
};
pub use identity::compute_identity;
pub use post::{ContentType, Post};
