//! Backend-neutral access to the upload area.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// A place uploaded files live.
///
/// Every path is relative to the backend's root; a leading `/` is ignored
/// and paths that climb out of the root are rejected.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// `true` when the root is present and usable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Create or overwrite `path`, making parent directories as needed.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Remove `path`. A file that is already gone counts as removed.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// `true` when `path` names an existing file.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
