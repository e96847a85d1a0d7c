//! Files received from a client.

use bytes::Bytes;
use tmsiti_core::result::AppResult;
use tmsiti_storage::{FileStore, StoredFile};

/// An uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Client-supplied file name.
    pub file_name: String,
    /// Declared MIME type.
    pub content_type: Option<String>,
    /// File content.
    pub data: Bytes,
}

impl FileUpload {
    /// Validate and write the file into `store`.
    pub(crate) async fn store_in(self, store: &FileStore) -> AppResult<StoredFile> {
        store
            .save(&self.file_name, self.content_type.as_deref(), self.data)
            .await
    }
}

/// Stores `upload` when there is one.
pub(crate) async fn store_optional(
    store: &FileStore,
    upload: Option<FileUpload>,
) -> AppResult<Option<StoredFile>> {
    match upload {
        Some(upload) => Ok(Some(upload.store_in(store).await?)),
        None => Ok(None),
    }
}

/// Removes a freshly stored file after the row that would reference it failed.
pub(crate) async fn discard(store: &FileStore, stored: Option<&StoredFile>) {
    if let Some(stored) = stored {
        store.remove_public(&stored.public_path).await;
    }
}
