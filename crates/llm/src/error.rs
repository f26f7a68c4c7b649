//! Typed error enum for the LLM crate.

use thiserror::Error;

/// Errors from LLM API operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty response: no choices returned")]
    EmptyResponse,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("all retries exhausted, last error: {0}")]
    RetriesExhausted(Box<LlmError>),
}

impl LlmError {
    /// Whether this error is transient and should be retried.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 529),
            _ => false,
        }
    }

    /// The upstream could not be reached (connect, timeout, broken body).
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::RetriesExhausted(inner) => inner.is_transport_failure(),
            _ => false,
        }
    }

    /// The upstream answered, but not with the JSON we expected.
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        match self {
            Self::JsonParse { .. } => true,
            Self::RetriesExhausted(inner) => inner.is_parse_failure(),
            _ => false,
        }
    }
}
