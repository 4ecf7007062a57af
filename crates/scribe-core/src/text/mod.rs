//! Text utilities shared by notes and the summarizer

pub mod html;

pub use html::{escape, to_plain_text};

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length of the trimmed text in characters
pub fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
