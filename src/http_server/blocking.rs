//! Service calls take the store lock and may fsync a snapshot, so handlers
//! run them on tokio's blocking pool instead of an async worker.

use std::sync::Arc;

use crate::service::{ServiceError, ServiceResult, Services};
use crate::storage::StoreError;

pub(crate) async fn run_blocking<T, F>(services: Arc<Services>, f: F) -> ServiceResult<T>
where
    F: FnOnce(&Services) -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&services))
        .await
        .map_err(|e| {
            ServiceError::from(StoreError::Unavailable(format!("Store task failed: {}", e)))
        })?
}
