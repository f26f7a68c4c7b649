use std::sync::Arc;

use caramel_storage::BlobStore;

use crate::ServiceError;

/// Lists gallery photos and serves their bytes.
pub struct GalleryService {
    store: Arc<dyn BlobStore>,
    container: String,
    public_base_url: String,
}

impl GalleryService {
    #[must_use]
    pub fn new(store: Arc<dyn BlobStore>, container: String, public_base_url: &str) -> Self {
        Self { store, container, public_base_url: public_base_url.trim_end_matches('/').to_owned() }
    }

    /// Public URLs of every photo in the container, sorted by blob name.
    ///
    /// A container that has not been created yet holds no photos.
    pub async fn list_image_urls(&self) -> Result<Vec<String>, ServiceError> {
        let names = match self.store.list_blobs(&self.container).await {
            Ok(names) => names,
            Err(e) if e.is_not_found() => {
                tracing::info!(container = %self.container, "image container missing, listing empty");
                Vec::new()
            },
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(count = names.len(), "listed gallery images");
        Ok(names
            .iter()
            .map(|name| format!("{}/{}/{name}", self.public_base_url, self.container))
            .collect())
    }

    /// Bytes of a photo, or `None` when it does not exist.
    ///
    /// Only the gallery container is reachable; any other container name is rejected.
    pub async fn fetch_image(
        &self,
        container: &str,
        name: &str,
    ) -> Result<Option<Vec<u8>>, ServiceError> {
        if container != self.container {
            return Err(ServiceError::InvalidInput(format!("unknown container {container:?}")));
        }
        Ok(self.store.get(container, name).await?)
    }
}

/// Content type for a photo, guessed from its extension.
#[must_use]
pub fn content_type_for(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caramel_storage::MemoryBlobStore;

    fn service_with(store: MemoryBlobStore) -> GalleryService {
        GalleryService::new(Arc::new(store), "dog-photos".to_owned(), "https://cdn.example.net/")
    }

    #[tokio::test]
    async fn test_lists_urls_in_name_order() {
        let service = service_with(MemoryBlobStore::with_blobs(
            "dog-photos",
            [("IMG_4208.jpg", vec![1]), ("IMG_0329.jpg", vec![2])],
        ));
        let urls = service.list_image_urls().await.unwrap();
        assert_eq!(urls, vec![
            "https://cdn.example.net/dog-photos/IMG_0329.jpg",
            "https://cdn.example.net/dog-photos/IMG_4208.jpg",
        ]);
    }

    #[tokio::test]
    async fn test_missing_container_lists_empty() {
        let service = service_with(MemoryBlobStore::new());
        assert!(service.list_image_urls().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_rejects_other_containers() {
        let service = service_with(MemoryBlobStore::with_blobs(
            "dog-photos",
            [("IMG_0329.jpg", vec![7])],
        ));
        assert_eq!(service.fetch_image("dog-photos", "IMG_0329.jpg").await.unwrap(), Some(vec![7]));
        assert!(service.fetch_image("dog-photos", "IMG_0000.jpg").await.unwrap().is_none());
        assert!(matches!(
            service.fetch_image("visitor-data", "visitor-count.json").await,
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("IMG_2899.JPG"), "image/jpeg");
        assert_eq!(content_type_for("treat.png"), "image/png");
        assert_eq!(content_type_for("README"), "application/octet-stream");
    }
}
