//! File storage
//!
//! Uploaded files are written to a bucket on a storage backend and exposed to
//! clients under a public URL prefix.

pub mod local;

use async_trait::async_trait;

use crate::error::AppResult;

pub use local::LocalDiskStorage;

/// Reference to a stored file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Path relative to the storage root, e.g. `assignments/1704844800_7_ab12_hw.pdf`
    pub relative_path: String,
    /// Externally addressable path, e.g. `/storage/assignments/...`
    pub public_path: String,
}

/// Blob storage backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Write `bytes` as `name` inside `bucket`, replacing any file of the same name
    async fn store(&self, bucket: &str, name: &str, bytes: &[u8]) -> AppResult<StoredFile>;

    /// Remove a previously stored file by its relative path
    async fn delete(&self, relative_path: &str) -> AppResult<()>;
}
