use std::sync::Arc;

use caramel_core::VisitorRecord;
use caramel_core::constants::{VISITOR_BLOB, VISITOR_CONTAINER};
use caramel_storage::BlobStore;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::ServiceError;

/// Read-increment-write visitor counter persisted as a JSON blob.
///
/// Increments issued through one service instance are serialized. Separate
/// processes sharing the same store still race, and the last writer wins.
pub struct VisitorService {
    store: Arc<dyn BlobStore>,
    update_lock: Mutex<()>,
}

impl VisitorService {
    #[must_use]
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store, update_lock: Mutex::new(()) }
    }

    /// Counts one visit and returns the stored record.
    ///
    /// A missing or unreadable document restarts the count at one. Storage
    /// failures are returned as errors and leave the document untouched.
    pub async fn record_visit(&self) -> Result<VisitorRecord, ServiceError> {
        let _guard = self.update_lock.lock().await;

        self.store.create_container_if_missing(VISITOR_CONTAINER).await?;
        let previous = self.load().await?;
        let record = VisitorRecord::next(previous.as_ref(), Utc::now());

        let bytes = serde_json::to_vec(&record)?;
        self.store.put(VISITOR_CONTAINER, VISITOR_BLOB, bytes).await?;
        tracing::info!(count = record.count, "visitor count updated");
        Ok(record)
    }

    async fn load(&self) -> Result<Option<VisitorRecord>, ServiceError> {
        let Some(bytes) = self.store.get(VISITOR_CONTAINER, VISITOR_BLOB).await? else {
            tracing::info!("no visitor document yet, starting new count");
            return Ok(None);
        };
        match serde_json::from_slice::<VisitorRecord>(&bytes) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(error = %e, "visitor document unreadable, restarting count");
                Ok(None)
            },
        }
    }
}
