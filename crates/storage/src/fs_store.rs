//! Filesystem blob store: one directory per container below a root.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::{BlobStore, validate_name};

#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the root directory cannot be created.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await.map_err(|e| StorageError::io(&root, e))?;
        tracing::debug!(root = %root.display(), "opened filesystem blob store");
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn container_path(&self, container: &str) -> Result<PathBuf, StorageError> {
        validate_name(container)?;
        Ok(self.root.join(container))
    }

    fn blob_path(&self, container: &str, name: &str) -> Result<PathBuf, StorageError> {
        validate_name(name)?;
        Ok(self.container_path(container)?.join(name))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn create_container_if_missing(&self, container: &str) -> Result<(), StorageError> {
        let path = self.container_path(container)?;
        tokio::fs::create_dir_all(&path).await.map_err(|e| StorageError::io(&path, e))
    }

    async fn container_exists(&self, container: &str) -> Result<bool, StorageError> {
        let path = self.container_path(container)?;
        match tokio::fs::metadata(&path).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }

    async fn list_blobs(&self, container: &str) -> Result<Vec<String>, StorageError> {
        let path = self.container_path(container)?;
        let mut entries = match tokio::fs::read_dir(&path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound { entity: "container", id: container.to_owned() });
            },
            Err(e) => return Err(StorageError::io(&path, e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| StorageError::io(&path, e))? {
            let file_type = entry.file_type().await.map_err(|e| StorageError::io(&entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }
            // Non-UTF-8 names cannot be expressed as URLs; in-flight temp files are hidden.
            let Ok(name) = entry.file_name().into_string() else { continue };
            if validate_name(&name).is_ok() {
                names.push(name);
            }
        }
        names.sort_unstable();
        Ok(names)
    }

    async fn get(&self, container: &str, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.blob_path(container, name)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }

    async fn put(&self, container: &str, name: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        let path = self.blob_path(container, name)?;
        if !self.container_exists(container).await? {
            return Err(StorageError::NotFound { entity: "container", id: container.to_owned() });
        }
        // Write-then-rename keeps readers from ever seeing a half-written blob.
        let tmp = self.container_path(container)?.join(format!(".{name}.{}.tmp", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, &bytes).await.map_err(|e| StorageError::io(&tmp, e))?;
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StorageError::io(&path, e));
        }
        Ok(())
    }
}
