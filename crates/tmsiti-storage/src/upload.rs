//! Upload acceptance rules and file persistence.
//!
//! One [`FileStore`] exists per upload kind: images and downloadable
//! documents differ only in their allow-list and target directory.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use tmsiti_core::config::StorageConfig;
use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_core::traits::storage::StorageProvider;

/// Which uploads are accepted and how they are named.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    allowed_types: Vec<String>,
    max_size_bytes: u64,
}

impl UploadPolicy {
    /// Create a policy from an allow-list of MIME types and a size cap.
    pub fn new(allowed_types: Vec<String>, max_size_bytes: u64) -> Self {
        Self {
            allowed_types,
            max_size_bytes,
        }
    }

    /// Policy for cover images and portraits.
    pub fn images(config: &StorageConfig) -> Self {
        Self::new(
            config.allowed_image_types.clone(),
            config.max_upload_size_bytes,
        )
    }

    /// Policy for downloadable documents.
    pub fn documents(config: &StorageConfig) -> Self {
        Self::new(
            config.allowed_document_types.clone(),
            config.max_upload_size_bytes,
        )
    }

    /// Reject uploads with a disallowed content type, no content, or too many bytes.
    pub fn check(&self, content_type: Option<&str>, size: usize) -> AppResult<()> {
        let content_type = content_type.unwrap_or("");
        if !self
            .allowed_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(content_type))
        {
            return Err(AppError::invalid_argument(format!(
                "Unsupported file type '{content_type}', allowed: {}",
                self.allowed_types.join(", ")
            )));
        }
        if size == 0 {
            return Err(AppError::invalid_argument("Uploaded file is empty"));
        }
        if size as u64 > self.max_size_bytes {
            return Err(AppError::invalid_argument(format!(
                "File exceeds maximum size of {} bytes",
                self.max_size_bytes
            )));
        }
        Ok(())
    }

    /// Unique on-disk name: `<uuid hex>_<sanitized original name>`.
    pub fn stored_name(&self, original: &str) -> String {
        format!("{}_{}", Uuid::new_v4().simple(), sanitize_filename(original))
    }
}

/// Keep the final path segment and replace anything outside `[A-Za-z0-9._-]`.
fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

/// A file that has been written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Path relative to the storage root.
    pub relative_path: String,
    /// Path under which the file is served, e.g. `/static/images/<name>`.
    pub public_path: String,
}

/// Writes accepted uploads of one kind and removes replaced ones.
#[derive(Debug, Clone)]
pub struct FileStore {
    provider: Arc<dyn StorageProvider>,
    policy: UploadPolicy,
    directory: String,
    public_prefix: String,
}

impl FileStore {
    /// Create a store writing into `directory` under the provider root.
    pub fn new(
        provider: Arc<dyn StorageProvider>,
        policy: UploadPolicy,
        directory: impl Into<String>,
        public_prefix: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            policy,
            directory: directory.into().trim_matches('/').to_string(),
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    /// Image store built from the storage configuration section.
    pub fn images(provider: Arc<dyn StorageProvider>, config: &StorageConfig) -> Self {
        Self::new(
            provider,
            UploadPolicy::images(config),
            config.image_dir.clone(),
            config.public_prefix.clone(),
        )
    }

    /// Document store built from the storage configuration section.
    pub fn documents(provider: Arc<dyn StorageProvider>, config: &StorageConfig) -> Self {
        Self::new(
            provider,
            UploadPolicy::documents(config),
            config.document_dir.clone(),
            config.public_prefix.clone(),
        )
    }

    /// Validate and persist an upload, returning where it can be found.
    pub async fn save(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        data: Bytes,
    ) -> AppResult<StoredFile> {
        self.policy.check(content_type, data.len())?;

        let name = self.policy.stored_name(original_name);
        let relative_path = format!("{}/{name}", self.directory);
        self.provider.write(&relative_path, data).await?;

        info!(path = %relative_path, "Stored uploaded file");
        Ok(StoredFile {
            public_path: format!("{}/{relative_path}", self.public_prefix),
            relative_path,
        })
    }

    /// Remove a previously stored file by its public path.
    ///
    /// Failures are logged and swallowed; a leftover file is harmless.
    pub async fn remove_public(&self, public_path: &str) {
        let Some(relative) = public_path
            .strip_prefix(&self.public_prefix)
            .map(|p| p.trim_start_matches('/'))
        else {
            warn!(path = public_path, "Not a managed storage path, skipping delete");
            return;
        };
        if let Err(e) = self.provider.delete(relative).await {
            warn!(path = public_path, error = %e, "Failed to remove stored file");
        }
    }
}
