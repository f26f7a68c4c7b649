//! Typed error enum for the storage layer.

use thiserror::Error;

/// Blob storage error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Container or blob expected to exist is missing.
    #[error("not found: {entity} {id}")]
    NotFound { entity: &'static str, id: String },

    /// Container or blob name that would escape its directory or is empty.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// Filesystem failure.
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io { path: path.display().to_string(), source }
    }
}
