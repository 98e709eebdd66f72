// src/config.rs

//! Configuration loading utilities.
//!
//! Tunables come from an optional TOML file (see [`crate::models::Config`]);
//! secrets come from the environment only and have no defaults. A missing
//! secret aborts the process before any work is done.

use std::env;

use crate::error::{AppError, Result};

/// Environment variable holding the DeepSeek API key.
pub const ENV_DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";
/// Environment variable holding the LINE channel access token.
pub const ENV_LINE_CHANNEL_ACCESS_TOKEN: &str = "LINE_CHANNEL_ACCESS_TOKEN";
/// Environment variable holding the target LINE group id.
pub const ENV_LINE_GROUP_ID: &str = "LINE_GROUP_ID";

/// Required runtime secrets, loaded from the environment at startup.
#[derive(Debug, Clone)]
pub struct Secrets {
    /// DeepSeek translation API key
    pub deepseek_api_key: String,

    /// LINE Messaging API channel access token
    pub line_channel_access_token: String,

    /// LINE group that receives notifications
    pub line_group_id: String,
}

impl Secrets {
    /// Load all required secrets from the environment.
    ///
    /// Fails with a descriptive [`AppError::Config`] naming the first
    /// missing variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            deepseek_api_key: required(ENV_DEEPSEEK_API_KEY)?,
            line_channel_access_token: required(ENV_LINE_CHANNEL_ACCESS_TOKEN)?,
            line_group_id: required(ENV_LINE_GROUP_ID)?,
        })
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!(
            "required environment variable {name} is not set"
        ))),
    }
}
