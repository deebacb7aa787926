/// Shared application state
use crate::services::{IntegrityCoordinator, OrderingEngine};
use karaoke_core::{KaraokeError, StorageContext};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn StorageContext>,
    pub ordering: OrderingEngine,
    pub integrity: IntegrityCoordinator,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(db: Arc<dyn StorageContext>, request_timeout: Duration) -> Self {
        Self {
            ordering: OrderingEngine::new(Arc::clone(&db)),
            integrity: IntegrityCoordinator::new(Arc::clone(&db)),
            db,
            request_timeout,
        }
    }

    /// Run the store work of one request under the request deadline
    ///
    /// On expiry the in-flight future is dropped; whatever single-record
    /// writes already completed stay in place.
    pub async fn with_deadline<T, F>(&self, work: F) -> karaoke_core::Result<T>
    where
        F: Future<Output = karaoke_core::Result<T>>,
    {
        match tokio::time::timeout(self.request_timeout, work).await {
            Ok(result) => result,
            Err(_) => Err(KaraokeError::Timeout(self.request_timeout)),
        }
    }
}
