//! CLI commands for scribe

pub mod delete;
pub mod dispatch;
pub mod format;
pub mod init;
pub mod input;
pub mod list;
pub mod new;
pub mod note_summary;
pub mod search;
pub mod show;
pub mod summarize;
pub mod update;
