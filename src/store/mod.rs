// src/store/mod.rs

//! Durable state: seen-post records and the first-run sentinel.
//!
//! The store is the only durable state the pipeline owns. Records are
//! append-only: a post is inserted exactly once, after the notify-or-
//! suppress decision has been finalized, and never updated or deleted.

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStore;

/// A post that has been fully processed (notified or suppressed).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeenPost {
    /// Identity digest, primary key
    pub post_id: String,

    /// Normalized text the identity was derived from
    pub content: String,

    /// When the record was inserted
    pub created_at: DateTime<Utc>,
}

/// Per-run policy state, loaded once at run start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    /// True until the first run reaches a definitive outcome
    pub first_run: bool,
}

impl RunState {
    /// Derive the run state from the persisted sentinel.
    pub async fn load(store: &dyn PostStore) -> Result<Self> {
        Ok(Self {
            first_run: !store.first_run_completed().await?,
        })
    }
}

/// Trait for dedup store backends.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Point lookup: has this identity been processed before? No side effect.
    async fn exists(&self, identity: &str) -> Result<bool>;

    /// Insert-only record of a processed post. A duplicate insert is a
    /// loud failure, not a silent upsert.
    async fn record(&self, identity: &str, content: &str) -> Result<()>;

    /// Whether a first run has ever completed with a definitive outcome.
    async fn first_run_completed(&self) -> Result<bool>;

    /// Persist the first-run sentinel. Idempotent; never cleared.
    async fn mark_first_run_completed(&self) -> Result<()>;
}
