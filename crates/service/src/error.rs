//! Typed error enum for the service layer.

use caramel_llm::LlmError;
use caramel_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and LLM failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Blob storage operation failed (IO, missing container, bad name).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// LLM client could not be built.
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    /// Caller provided invalid input (blank message, unknown container).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Serialization of a stored document failed.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

