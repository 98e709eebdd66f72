// src/lib.rs

//! truthline: Truth Social → LINE monitor library

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod store;
pub mod translate;
pub mod utils;
