//! Extractive summarization
//!
//! Picks the highest-scoring sentences of a text and returns them in document
//! order. A sentence scores the sum of the whole-text frequencies of its
//! words; the first three sentences get a positional boost.
//!
//! Word frequencies are counted over the entire input, including fragments
//! too short to count as sentences. Those fragments can never be selected but
//! still shape the scores of the sentences that can.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Fragments whose trimmed length is at or below this are dropped as noise
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Inputs with this many sentences or fewer are returned unchanged
pub const PASSTHROUGH_SENTENCES: usize = 3;

/// Upper bound on the number of sentences in a summary
pub const MAX_SUMMARY_SENTENCES: usize = 3;

/// Sentences at filtered indexes below this receive [`LEAD_BOOST`]
pub const LEAD_SENTENCES: usize = 3;

/// Score multiplier for leading sentences
pub const LEAD_BOOST: f64 = 1.5;

static SENTENCE_BREAK: OnceLock<Regex> = OnceLock::new();
static WORD: OnceLock<Regex> = OnceLock::new();

fn sentence_break() -> &'static Regex {
    SENTENCE_BREAK.get_or_init(|| Regex::new(r"[.!?]+").expect("static pattern compiles"))
}

fn word() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"[A-Za-z0-9_]+").expect("static pattern compiles"))
}

/// A candidate sentence with its position and score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'a> {
    /// Trimmed sentence text, without terminal punctuation
    pub text: &'a str,
    /// Index in the filtered sentence sequence
    pub index: usize,
    /// Term-frequency score including the positional boost
    pub score: f64,
}

/// Split text into trimmed sentences, dropping short fragments
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_break()
        .split(text)
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > MIN_SENTENCE_CHARS)
        .collect()
}

/// Lowercase word tokens of `text`
fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count every lowercase word of `text`
pub fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for token in words(text) {
        *frequencies.entry(token).or_insert(0) += 1;
    }
    frequencies
}

/// Score each sentence against a frequency table
pub fn score_sentences<'a>(
    sentences: &[&'a str],
    frequencies: &HashMap<String, usize>,
) -> Vec<ScoredSentence<'a>> {
    sentences
        .iter()
        .enumerate()
        .map(|(index, &text)| {
            let raw: usize = words(text)
                .iter()
                .map(|token| frequencies.get(token).copied().unwrap_or(0))
                .sum();
            let boost = if index < LEAD_SENTENCES { LEAD_BOOST } else { 1.0 };
            ScoredSentence {
                text,
                index,
                score: raw as f64 * boost,
            }
        })
        .collect()
}

/// Number of sentences kept from `sentence_count` candidates
pub fn selection_size(sentence_count: usize) -> usize {
    sentence_count.div_ceil(3).min(MAX_SUMMARY_SENTENCES)
}

/// Summarize `text` by sentence extraction
///
/// Returns `text` unchanged when it has [`PASSTHROUGH_SENTENCES`] or fewer
/// sentences. Otherwise the top-scoring sentences are joined with `". "` in
/// document order and terminated with a period. Never fails.
pub fn summarize(text: &str) -> String {
    let sentences = split_sentences(text);
    if sentences.len() <= PASSTHROUGH_SENTENCES {
        return text.to_string();
    }

    let frequencies = word_frequencies(text);
    let mut scored = score_sentences(&sentences, &frequencies);

    // Stable: equal scores keep document order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(selection_size(sentences.len()));
    scored.sort_by_key(|sentence| sentence.index);

    let selected: Vec<&str> = scored.iter().map(|sentence| sentence.text).collect();
    let mut summary = selected.join(". ");
    summary.push('.');
    summary
}
