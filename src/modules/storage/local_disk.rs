//! Local filesystem storage backend
//!
//! Development fallback: files land in a directory served as static content
//! (e.g. `public/uploads`), URLs are built from a configured public base.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::core::config::LocalDiskConfig;
use crate::core::error::AppError;
use crate::modules::storage::StorageBackend;

pub struct LocalDiskStorage {
    root_dir: PathBuf,
    public_base_url: String,
}

impl LocalDiskStorage {
    pub async fn new(config: LocalDiskConfig) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(&config.root_dir)
            .await
            .map_err(|e| {
                AppError::Internal(format!(
                    "Failed to create uploads directory '{}': {}",
                    config.root_dir.display(),
                    e
                ))
            })?;

        Ok(Self {
            root_dir: config.root_dir,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Storage keys are flat file names; anything path-like is rejected so a
    /// key can never escape the uploads directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        if key.is_empty() || key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(AppError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.root_dir.join(key))
    }
}

#[async_trait]
impl StorageBackend for LocalDiskStorage {
    async fn store(
        &self,
        key: &str,
        data: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, AppError> {
        let path = self.path_for(key)?;

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write '{}': {}", path.display(), e)))?;

        debug!("Wrote '{}'", path.display());

        Ok(format!("{}/{}", self.public_base_url, key))
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed '{}'", path.display());
                Ok(())
            }
            // Already gone is as good as deleted
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    async fn temp_storage() -> LocalDiskStorage {
        let root = std::env::temp_dir().join(format!("galerie-test-{}", Uuid::new_v4()));
        LocalDiskStorage::new(LocalDiskConfig {
            root_dir: root,
            public_base_url: "/uploads/".to_string(),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_store_writes_file_and_returns_url() {
        let storage = temp_storage().await;

        let url = storage
            .store("ev-1700000000000-0.jpg", b"jpegdata".to_vec(), "image/jpeg")
            .await
            .unwrap();

        assert_eq!(url, "/uploads/ev-1700000000000-0.jpg");
        let on_disk = tokio::fs::read(storage.root_dir().join("ev-1700000000000-0.jpg"))
            .await
            .unwrap();
        assert_eq!(on_disk, b"jpegdata");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let storage = temp_storage().await;

        storage
            .store("ev-1700000000000-0.jpg", b"x".to_vec(), "image/jpeg")
            .await
            .unwrap();

        storage.delete("ev-1700000000000-0.jpg").await.unwrap();
        // Second delete finds nothing and still succeeds
        storage.delete("ev-1700000000000-0.jpg").await.unwrap();
    }

    #[tokio::test]
    async fn test_path_like_keys_are_rejected() {
        let storage = temp_storage().await;

        assert!(storage.store("../escape.jpg", b"x".to_vec(), "image/jpeg").await.is_err());
        assert!(storage.delete("a/b.jpg").await.is_err());
    }
}
