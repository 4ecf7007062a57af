//! Core library for scribe
//!
//! Notes live in a local `.scribe/` store; summaries come from a remote
//! model when one is reachable and from a local extractive summarizer
//! otherwise.

pub mod config;
pub mod error;
pub mod format;
pub mod id;
pub mod logging;
pub mod note;
pub mod store;
pub mod summarize;
pub mod templates;
pub mod text;
