//! Error types and exit codes for scribe
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, input too short to summarize)
//! - 3: Data/store error (missing store, unknown note, invalid frontmatter)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, unknown note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during scribe operations
#[derive(Error, Debug)]
pub enum ScribeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("text must be at least {min} characters long (got {actual})")]
    InputTooShort { min: usize, actual: usize },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    #[error("invalid frontmatter in {path:?}: {reason}")]
    InvalidFrontmatter { path: PathBuf, reason: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl ScribeError {
    /// Create an invalid value error
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ScribeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an already exists error
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        ScribeError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, reason: impl std::fmt::Display) -> Self {
        ScribeError::FailedOperation {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ScribeError::UnknownFormat(_)
            | ScribeError::UsageError(_)
            | ScribeError::InputTooShort { .. }
            | ScribeError::InvalidValue { .. } => ExitCode::Usage,

            ScribeError::StoreNotFound { .. }
            | ScribeError::NoteNotFound { .. }
            | ScribeError::InvalidFrontmatter { .. }
            | ScribeError::AlreadyExists { .. } => ExitCode::Data,

            ScribeError::Io(_)
            | ScribeError::Yaml(_)
            | ScribeError::Json(_)
            | ScribeError::Toml(_)
            | ScribeError::FailedOperation { .. }
            | ScribeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ScribeError::UnknownFormat(_) => "unknown_format",
            ScribeError::UsageError(_) => "usage_error",
            ScribeError::InputTooShort { .. } => "input_too_short",
            ScribeError::InvalidValue { .. } => "invalid_value",
            ScribeError::StoreNotFound { .. } => "store_not_found",
            ScribeError::NoteNotFound { .. } => "note_not_found",
            ScribeError::InvalidFrontmatter { .. } => "invalid_frontmatter",
            ScribeError::AlreadyExists { .. } => "already_exists",
            ScribeError::Io(_) => "io_error",
            ScribeError::Yaml(_) => "yaml_error",
            ScribeError::Json(_) => "json_error",
            ScribeError::Toml(_) => "toml_error",
            ScribeError::FailedOperation { .. } => "failed_operation",
            ScribeError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for scribe operations
pub type Result<T> = std::result::Result<T, ScribeError>;
