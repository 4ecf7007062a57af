//! Remote summarization through a hosted language model
//!
//! The remote model is a collaborator: it either returns summary text or
//! fails. Every failure is reported as a [`RemoteError`] so the pipeline can
//! fall back to the local summarizer.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ureq::Agent;

use crate::config::RemoteConfig;

/// Sampling temperature requested from the model
pub const TEMPERATURE: f64 = 0.3;

/// Top-k sampling bound requested from the model
pub const TOP_K: u32 = 40;

/// Nucleus sampling bound requested from the model
pub const TOP_P: f64 = 0.95;

/// Harm categories blocked at medium probability and above
pub const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

/// Something that can produce a summary remotely
pub trait RemoteSummarizer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Summarize `text` in roughly `max_length` characters
    fn summarize(&self, text: &str, max_length: usize) -> Result<String, RemoteError>;
}

/// Ways a remote summarization can fail
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("remote returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("remote returned an empty summary")]
    EmptySummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: usize,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Prompt sent to the model
fn prompt(text: &str, max_length: usize) -> String {
    format!(
        "Please provide a concise summary of the following text in approximately \
         {max_length} characters or less. Focus on the main points and key information:\n\n{text}"
    )
}

fn build_request(text: &str, max_length: usize) -> GenerateRequest {
    GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart {
                text: prompt(text, max_length),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: max_length,
        },
        safety_settings: SAFETY_CATEGORIES
            .iter()
            .map(|&category| SafetySetting {
                category,
                threshold: SAFETY_THRESHOLD,
            })
            .collect(),
    }
}

/// Pull the summary text out of a response payload
fn parse_summary(payload: &str) -> Result<String, RemoteError> {
    let response: GenerateResponse = serde_json::from_str(payload)
        .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| RemoteError::MalformedResponse("no candidate text".to_string()))?;

    let summary = text.trim();
    if summary.is_empty() {
        return Err(RemoteError::EmptySummary);
    }
    Ok(summary.to_string())
}

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    config: RemoteConfig,
    agent: Agent,
    user_agent: String,
}

impl GeminiClient {
    /// Create a client with the given settings
    pub fn new(config: RemoteConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();
        let user_agent = format!(
            "scribe/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );

        Self {
            config,
            agent,
            user_agent,
        }
    }

    /// Full URL of the generate endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl RemoteSummarizer for GeminiClient {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn summarize(&self, text: &str, max_length: usize) -> Result<String, RemoteError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(RemoteError::MissingApiKey)?;

        let body = serde_json::to_string(&build_request(text, max_length))
            .map_err(|e| RemoteError::Encode(e.to_string()))?;

        let url = self.endpoint();
        debug!(url = %url, body_len = body.len(), "remote_request");

        let response = self
            .agent
            .post(url.as_str())
            .header("Content-Type", "application/json")
            .header("User-Agent", self.user_agent.as_str())
            .header("x-goog-api-key", api_key)
            .send(body);

        match response {
            Ok(mut res) => {
                let status = res.status();
                if !status.is_success() {
                    return Err(RemoteError::Status(status.as_u16()));
                }
                let payload = res
                    .body_mut()
                    .read_to_string()
                    .map_err(|e| RemoteError::Transport(e.to_string()))?;
                parse_summary(&payload)
            }
            Err(ureq::Error::StatusCode(code)) => Err(RemoteError::Status(code)),
            Err(e) => Err(RemoteError::Transport(e.to_string())),
        }
    }
}
