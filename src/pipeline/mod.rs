// src/pipeline/mod.rs

//! Pipeline entry points for monitor operations.
//!
//! - `run_once`: execute one full fetch → dedup → classify → translate →
//!   notify → commit sequence
//! - `classify`: pure content classification

pub mod classify;
pub mod compose;
pub mod run;

pub use classify::classify;
pub use run::{RunOutcome, run_once};
