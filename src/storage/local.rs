//! Local disk storage backend

use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    config::StorageConfig,
    error::{AppError, AppResult},
    utils::is_single_path_component,
};

use super::{FileStorage, StoredFile};

/// Stores files beneath a root directory on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalDiskStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalDiskStorage {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.root, &config.public_prefix)
    }

    fn resolve(&self, relative_path: &str) -> AppResult<PathBuf> {
        let mut path = self.root.clone();
        for component in relative_path.split('/') {
            if !is_single_path_component(component) {
                return Err(AppError::Storage(format!(
                    "Refusing to resolve storage path: {}",
                    relative_path
                )));
            }
            path.push(component);
        }
        Ok(path)
    }
}

#[async_trait]
impl FileStorage for LocalDiskStorage {
    async fn store(&self, bucket: &str, name: &str, bytes: &[u8]) -> AppResult<StoredFile> {
        let relative_path = format!("{}/{}", bucket, name);
        let path = self.resolve(&relative_path)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::Storage(format!("Failed to create directory: {}", e))
            })?;
        }

        tokio::fs::write(&path, bytes).await.map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", relative_path, e))
        })?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "File stored");

        Ok(StoredFile {
            public_path: format!("{}/{}", self.public_prefix, relative_path),
            relative_path,
        })
    }

    async fn delete(&self, relative_path: &str) -> AppResult<()> {
        let path = self.resolve(relative_path)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
