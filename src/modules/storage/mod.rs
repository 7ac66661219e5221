//! Storage backends for uploaded media.
//!
//! The ingestion pipeline is indifferent to where bytes land: it talks to a
//! single [`StorageBackend`] capability, and the concrete backend (an
//! S3-compatible object store or the local filesystem) is picked once at
//! startup from configuration.

mod local_disk;
mod s3_client;

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::config::{StorageBackendKind, StorageConfig};
use crate::core::error::AppError;

pub use local_disk::LocalDiskStorage;
pub use s3_client::S3Storage;

/// Write/delete capability the ingestion pipeline depends on
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Persist `data` under `key` and return a retrievable URL
    async fn store(&self, key: &str, data: Vec<u8>, content_type: &str)
        -> Result<String, AppError>;

    /// Remove the object stored under `key`
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// Build the configured storage backend
pub async fn from_config(config: &StorageConfig) -> Result<Arc<dyn StorageBackend>, AppError> {
    match config.backend {
        StorageBackendKind::S3 => {
            let s3_config = config.s3.clone().ok_or_else(|| {
                AppError::Internal("S3 backend selected but no S3 configuration present".to_string())
            })?;
            let client = S3Storage::new(s3_config)?;
            client.ensure_bucket_exists().await?;
            tracing::info!("Storage backend: s3, bucket: {}", client.bucket_name());
            Ok(Arc::new(client))
        }
        StorageBackendKind::Local => {
            let storage = LocalDiskStorage::new(config.local.clone()).await?;
            tracing::info!("Storage backend: local, dir: {}", storage.root_dir().display());
            Ok(Arc::new(storage))
        }
    }
}
