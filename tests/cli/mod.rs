mod init;
mod logging;
mod note_summary;
mod notes;
mod summarize;
pub mod support;
