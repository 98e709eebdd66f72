// src/pipeline/run.rs

//! The run orchestrator.
//!
//! One invocation drives one run through the gate sequence:
//! fetch → dedup → classify → translate → notify → commit, with an early
//! exit at any gate. Collaborator failures become policy branches here;
//! only configuration and store errors escape to the process boundary.
//!
//! Commit ordering is the delivery guarantee: a post is recorded only
//! after the notifier confirmed delivery (or after the deliberate video
//! suppression), so a failed push leaves the post eligible for retry on
//! the next scheduled run.

use crate::error::Result;
use crate::fetch::PostSource;
use crate::models::{Config, ContentType};
use crate::notify::Notifier;
use crate::store::{PostStore, RunState};
use crate::translate::Translator;

use super::classify::classify;
use super::compose;

/// Terminal outcome of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Transient fetch/render failure; first-run sentinel untouched
    FetchFailed,
    /// Page fetched, no extractable post (definitive absence)
    NoPost,
    /// Post identity already recorded; fully idempotent no-op
    AlreadySeen,
    /// Video post recorded without notification
    VideoRecorded,
    /// Text post notified and committed
    Notified,
    /// Delivery failed; post not committed, will be re-attempted
    NotifyFailed,
}

/// Execute one full pipeline run.
pub async fn run_once(
    config: &Config,
    source: &dyn PostSource,
    translator: &dyn Translator,
    notifier: &dyn Notifier,
    store: &dyn PostStore,
) -> Result<RunOutcome> {
    let state = RunState::load(store).await?;

    if state.first_run {
        log::info!("First run: sending startup announcement");
        announce(notifier, &config.messages.startup).await;
    }

    let post = match source.latest_post().await {
        Ok(Some(post)) => post,
        Ok(None) => {
            // Definitive absence: the page rendered but held no post.
            log::warn!("No post found on the profile page");
            if state.first_run {
                announce(notifier, &config.messages.no_post).await;
                store.mark_first_run_completed().await?;
            }
            return Ok(RunOutcome::NoPost);
        }
        Err(error) => {
            // Transient failure: the sentinel is not written, so the next
            // run repeats the full first-run sequence.
            log::error!("Fetch failed: {error}");
            if state.first_run {
                announce(notifier, &config.messages.no_post).await;
            }
            return Ok(RunOutcome::FetchFailed);
        }
    };

    log::info!(
        "Latest post {} ({} chars, {} media)",
        post.identity,
        post.text.len(),
        post.media_refs.len()
    );

    if store.exists(&post.identity).await? {
        log::info!("Post {} already seen, skipping", post.identity);
        if state.first_run {
            // A seen post is still a definitive outcome.
            store.mark_first_run_completed().await?;
        }
        return Ok(RunOutcome::AlreadySeen);
    }

    if state.first_run {
        announce(
            notifier,
            &compose::first_scrape_message(&config.messages, &post),
        )
        .await;
        store.mark_first_run_completed().await?;
    }

    let content_type = classify(&post.media_refs);
    if content_type == ContentType::Video {
        // Video posts are recorded but never announced: translation and
        // formatting for video are out of scope, and recording prevents
        // repeat processing.
        log::info!("Video post {}: recording without notification", post.identity);
        store.record(&post.identity, &post.text).await?;
        return Ok(RunOutcome::VideoRecorded);
    }

    let translated = match translator.translate(&post.text).await {
        Ok(text) => text,
        Err(error) => {
            log::error!("Translation failed, using tagged fallback: {error}");
            compose::translation_fallback(&config.messages, &post.text)
        }
    };

    let message = compose::content_message(&config.messages, &post, content_type, &translated);

    match notifier.push(&message).await {
        Ok(()) => {
            store.record(&post.identity, &post.text).await?;
            log::info!("Post {} notified and committed", post.identity);
            Ok(RunOutcome::Notified)
        }
        Err(error) => {
            log::error!("Notification failed, post left for next run: {error}");
            Ok(RunOutcome::NotifyFailed)
        }
    }
}

/// Best-effort announcement: a failure is logged and the run continues.
async fn announce(notifier: &dyn Notifier, message: &str) {
    if let Err(error) = notifier.push(message).await {
        log::warn!("Announcement failed (continuing): {error}");
    }
}
