//! Remote-first summarization with an extractive fallback
//!
//! The remote model is tried first. When it is not configured or fails for
//! any reason, the extractive summarizer runs on the same text. Callers get
//! a tagged [`SummaryOutcome`] saying which path produced the summary; remote
//! failures never surface as errors.

use std::time::Instant;

use tracing::{debug, warn};

use super::extractive;
use super::remote::{GeminiClient, RemoteSummarizer};
use crate::config::{SummarizeConfig, DEFAULT_MAX_LENGTH, DEFAULT_MIN_INPUT_CHARS};
use crate::error::{Result, ScribeError};
use crate::text::trimmed_len;

/// Reason recorded when no remote summarizer is configured
pub const REMOTE_DISABLED: &str = "remote summarizer disabled";

/// Text to summarize plus a length hint for the remote model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    /// Plain text (markup already stripped)
    pub text: String,
    /// Approximate summary length; the extractive path ignores it
    pub max_length: usize,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

/// Which path produced a summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The remote model answered
    RemoteSuccess(String),
    /// The extractive summarizer ran instead
    FallbackUsed { summary: String, reason: String },
}

impl SummaryOutcome {
    /// The summary text
    pub fn text(&self) -> &str {
        match self {
            SummaryOutcome::RemoteSuccess(summary) => summary,
            SummaryOutcome::FallbackUsed { summary, .. } => summary,
        }
    }

    /// Consume the outcome, keeping the summary text
    pub fn into_text(self) -> String {
        match self {
            SummaryOutcome::RemoteSuccess(summary) => summary,
            SummaryOutcome::FallbackUsed { summary, .. } => summary,
        }
    }

    /// `"remote"` or `"extractive"`
    pub fn source(&self) -> &'static str {
        match self {
            SummaryOutcome::RemoteSuccess(_) => "remote",
            SummaryOutcome::FallbackUsed { .. } => "extractive",
        }
    }

    /// Why the remote path was not used, if it wasn't
    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            SummaryOutcome::RemoteSuccess(_) => None,
            SummaryOutcome::FallbackUsed { reason, .. } => Some(reason.as_str()),
        }
    }
}

/// Summarization service
///
/// Built once and shared by reference. Holds the optional remote collaborator
/// and the minimum input length policy.
pub struct Summarizer {
    remote: Option<Box<dyn RemoteSummarizer>>,
    min_input_chars: usize,
}

impl Summarizer {
    /// Create a summarizer with an optional remote collaborator
    pub fn new(remote: Option<Box<dyn RemoteSummarizer>>) -> Self {
        Self {
            remote,
            min_input_chars: DEFAULT_MIN_INPUT_CHARS,
        }
    }

    /// Create a summarizer that only uses the extractive path
    pub fn local() -> Self {
        Self::new(None)
    }

    /// Create a summarizer from configuration
    pub fn from_config(config: &SummarizeConfig) -> Self {
        let remote: Option<Box<dyn RemoteSummarizer>> = if config.remote_enabled {
            Some(Box::new(GeminiClient::new(config.remote.clone())))
        } else {
            None
        };
        Self::new(remote).with_min_input_chars(config.min_input_chars)
    }

    pub fn with_min_input_chars(mut self, min_input_chars: usize) -> Self {
        self.min_input_chars = min_input_chars;
        self
    }

    /// Whether a remote collaborator is configured
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Reject input too short to be worth summarizing
    pub fn check_input(&self, text: &str) -> Result<()> {
        let actual = trimmed_len(text);
        if actual < self.min_input_chars {
            return Err(ScribeError::InputTooShort {
                min: self.min_input_chars,
                actual,
            });
        }
        Ok(())
    }

    /// Summarize a request
    ///
    /// Fails only when the input is too short. Remote failures fall back to
    /// the extractive summarizer.
    pub fn summarize(&self, request: &SummaryRequest) -> Result<SummaryOutcome> {
        self.check_input(&request.text)?;
        let start = Instant::now();

        let outcome = match &self.remote {
            None => fallback(&request.text, REMOTE_DISABLED.to_string()),
            Some(remote) => match remote.summarize(&request.text, request.max_length) {
                Ok(summary) => {
                    debug!(remote = remote.name(), len = summary.len(), "remote_summary");
                    SummaryOutcome::RemoteSuccess(summary)
                }
                Err(e) => {
                    warn!(
                        remote = remote.name(),
                        error = %e,
                        "remote summarization failed, falling back to extractive summary"
                    );
                    fallback(&request.text, e.to_string())
                }
            },
        };

        crate::trace_time!(start, "summarize", source = outcome.source());
        Ok(outcome)
    }
}

fn fallback(text: &str, reason: String) -> SummaryOutcome {
    SummaryOutcome::FallbackUsed {
        summary: extractive::summarize(text),
        reason,
    }
}
