// src/store/local.rs

//! Local filesystem store implementation.
//!
//! ## Storage layout
//!
//! ```text
//! {data_dir}/
//! ├── posts.json            # append-only seen-post records
//! └── first_run_completed   # sentinel: present ⇒ not first run
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::store::{PostStore, SeenPost};

const POSTS_FILE: &str = "posts.json";
const SENTINEL_FILE: &str = "first_run_completed";

/// Local filesystem store backend.
#[derive(Debug, Clone)]
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at the given directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn load_posts(&self) -> Result<Vec<SeenPost>> {
        match tokio::fs::read(self.path(POSTS_FILE)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)
                .map_err(|e| AppError::store(format!("{POSTS_FILE} is corrupt: {e}")))?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    async fn save_posts(&self, posts: &[SeenPost]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(posts)?;
        self.write_bytes(POSTS_FILE, &bytes).await
    }

    /// Number of recorded posts (used by the `info` subcommand).
    pub async fn post_count(&self) -> Result<usize> {
        Ok(self.load_posts().await?.len())
    }
}

#[async_trait]
impl PostStore for LocalStore {
    async fn exists(&self, identity: &str) -> Result<bool> {
        let posts = self.load_posts().await?;
        Ok(posts.iter().any(|p| p.post_id == identity))
    }

    async fn record(&self, identity: &str, content: &str) -> Result<()> {
        let mut posts = self.load_posts().await?;

        if posts.iter().any(|p| p.post_id == identity) {
            return Err(AppError::store(format!(
                "duplicate insert for post {identity}"
            )));
        }

        posts.push(SeenPost {
            post_id: identity.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        });
        self.save_posts(&posts).await?;

        log::info!("Recorded post {identity}");
        Ok(())
    }

    async fn first_run_completed(&self) -> Result<bool> {
        match tokio::fs::try_exists(self.path(SENTINEL_FILE)).await {
            Ok(exists) => Ok(exists),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    async fn mark_first_run_completed(&self) -> Result<()> {
        self.write_bytes(SENTINEL_FILE, b"completed").await
    }
}
