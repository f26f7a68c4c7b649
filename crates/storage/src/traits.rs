//! Blob container trait abstraction.
//!
//! A container is a flat namespace of named byte objects. Backends decide
//! where the bytes live; callers only see names.

use async_trait::async_trait;

use crate::error::StorageError;

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Create `container` unless it already exists.
    async fn create_container_if_missing(&self, container: &str) -> Result<(), StorageError>;

    /// Whether `container` exists.
    async fn container_exists(&self, container: &str) -> Result<bool, StorageError>;

    /// Blob names in `container`, sorted ascending.
    ///
    /// Returns `NotFound` when the container does not exist.
    async fn list_blobs(&self, container: &str) -> Result<Vec<String>, StorageError>;

    /// Blob contents, or `None` when the blob (or its container) is missing.
    async fn get(&self, container: &str, name: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write `bytes` to the blob, replacing any previous contents.
    ///
    /// The container must exist.
    async fn put(&self, container: &str, name: &str, bytes: Vec<u8>) -> Result<(), StorageError>;
}

/// Rejects names that are empty, hidden, or could leave the container.
pub fn validate_name(name: &str) -> Result<(), StorageError> {
    let bad = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(StorageError::InvalidName(name.to_owned()));
    }
    Ok(())
}
