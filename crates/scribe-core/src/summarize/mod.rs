//! Summarization: local extractive summaries and the remote-first pipeline

pub mod extractive;
pub mod pipeline;
pub mod remote;

pub use pipeline::{SummaryOutcome, SummaryRequest, Summarizer};
pub use remote::{GeminiClient, RemoteError, RemoteSummarizer};
