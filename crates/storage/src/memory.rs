//! In-memory blob store for tests and throwaway deployments.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{BlobStore, validate_name};

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    containers: RwLock<HashMap<String, BTreeMap<String, Vec<u8>>>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `blobs` in `container`.
    pub fn with_blobs<I, N>(container: &str, blobs: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<u8>)>,
        N: Into<String>,
    {
        let files = blobs.into_iter().map(|(name, bytes)| (name.into(), bytes)).collect();
        let mut containers = HashMap::new();
        containers.insert(container.to_owned(), files);
        Self { containers: RwLock::new(containers) }
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn create_container_if_missing(&self, container: &str) -> Result<(), StorageError> {
        validate_name(container)?;
        self.containers.write().await.entry(container.to_owned()).or_default();
        Ok(())
    }

    async fn container_exists(&self, container: &str) -> Result<bool, StorageError> {
        validate_name(container)?;
        Ok(self.containers.read().await.contains_key(container))
    }

    async fn list_blobs(&self, container: &str) -> Result<Vec<String>, StorageError> {
        validate_name(container)?;
        self.containers
            .read()
            .await
            .get(container)
            .map(|files| files.keys().cloned().collect())
            .ok_or_else(|| StorageError::NotFound { entity: "container", id: container.to_owned() })
    }

    async fn get(&self, container: &str, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_name(container)?;
        validate_name(name)?;
        Ok(self.containers.read().await.get(container).and_then(|files| files.get(name).cloned()))
    }

    async fn put(&self, container: &str, name: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        validate_name(container)?;
        validate_name(name)?;
        let mut containers = self.containers.write().await;
        let files = containers
            .get_mut(container)
            .ok_or_else(|| StorageError::NotFound { entity: "container", id: container.to_owned() })?;
        files.insert(name.to_owned(), bytes);
        Ok(())
    }
}
