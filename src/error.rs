//! Error types for the sentiment-classification workflow

use thiserror::Error;

/// Errors that can occur during workflow operations
#[derive(Debug, Error)]
pub enum SentiraError {
    /// Configuration error (unrecognized model, bad settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input error (unreadable CSV, no text column)
    #[error("Input error: {0}")]
    Input(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Errors specific to LLM provider operations
#[derive(Debug, Error)]
pub enum LlmError {
    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// API error
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_connect() {
            LlmError::Network(format!("Connection error: {}", err))
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

/// Error raised when a batch aborts partway through.
///
/// `completed` counts the reviews that finished before the failing call;
/// their results are discarded along with the rest of the batch.
#[derive(Debug, Error)]
#[error("batch aborted after {completed} of {total} reviews")]
pub struct BatchError {
    pub completed: usize,
    pub total: usize,
    #[source]
    pub source: SentiraError,
}

/// Result type alias for workflow operations
pub type Result<T> = std::result::Result<T, SentiraError>;

/// Result type alias for LLM operations
pub type LlmResult<T> = std::result::Result<T, LlmError>;
