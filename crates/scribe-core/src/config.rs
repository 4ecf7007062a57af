//! Store configuration for scribe
//!
//! Configuration lives in `.scribe/config.toml`. Every field has a default, so
//! a missing file or a partial one is fine. A handful of environment variables
//! override the remote summarizer settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScribeError};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Category assigned to notes created without one
pub const DEFAULT_CATEGORY: &str = "Personal";

/// Default remote API base URL
pub const DEFAULT_REMOTE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default remote model
pub const DEFAULT_REMOTE_MODEL: &str = "gemini-1.5-flash-latest";

/// Default timeout for remote summarization requests
pub const DEFAULT_REMOTE_TIMEOUT_SECONDS: u64 = 30;

/// Minimum trimmed input length accepted for summarization
pub const DEFAULT_MIN_INPUT_CHARS: usize = 50;

/// Default summary length hint passed to the remote model
pub const DEFAULT_MAX_LENGTH: usize = 200;

/// Environment variable holding the remote API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the remote base URL
pub const REMOTE_URL_ENV: &str = "SCRIBE_REMOTE_URL";

/// Environment variable overriding the remote timeout (seconds)
pub const REMOTE_TIMEOUT_ENV: &str = "SCRIBE_REMOTE_TIMEOUT";

/// Top-level store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScribeConfig {
    /// Store format version
    pub version: u32,
    /// Category for new notes
    pub default_category: String,
    /// Summarization settings
    pub summarize: SummarizeConfig,
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            default_category: DEFAULT_CATEGORY.to_string(),
            summarize: SummarizeConfig::default(),
        }
    }
}

/// Summarization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizeConfig {
    /// Inputs shorter than this (after trimming) are rejected
    pub min_input_chars: usize,
    /// Length hint for the remote model
    pub max_length: usize,
    /// Whether to try the remote model before the local summarizer
    pub remote_enabled: bool,
    /// Remote model settings
    pub remote: RemoteConfig,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            min_input_chars: DEFAULT_MIN_INPUT_CHARS,
            max_length: DEFAULT_MAX_LENGTH,
            remote_enabled: true,
            remote: RemoteConfig::default(),
        }
    }
}

/// Remote summarizer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// API base URL
    pub base_url: String,
    /// Model name
    pub model: String,
    /// API key; usually left unset in favour of `GEMINI_API_KEY`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REMOTE_URL.to_string(),
            model: DEFAULT_REMOTE_MODEL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECONDS,
        }
    }
}

impl RemoteConfig {
    /// Apply overrides from a variable lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|s| !s.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }

        if let Some(url) = lookup(REMOTE_URL_ENV).filter(|s| !s.is_empty()) {
            self.base_url = url;
        }

        if let Some(timeout) = lookup(REMOTE_TIMEOUT_ENV) {
            if let Ok(seconds) = timeout.parse::<u64>() {
                self.timeout_secs = seconds;
            }
        }

        self.timeout_secs = self.timeout_secs.clamp(5, 300);
    }
}

impl ScribeConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ScribeConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration if the file exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScribeError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply environment overrides to the remote settings
    pub fn apply_env(&mut self) {
        self.summarize
            .remote
            .apply_overrides(|name| std::env::var(name).ok());
    }
}
