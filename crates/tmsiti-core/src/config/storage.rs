//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Local upload storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for uploaded files.
    #[serde(default = "default_root")]
    pub root_path: String,
    /// URL prefix under which the root directory is served.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Maximum size of a single uploaded file in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Content types accepted for image uploads.
    #[serde(default = "default_image_types")]
    pub allowed_image_types: Vec<String>,
    /// Subdirectory of the root that holds images.
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
    /// Content types accepted for downloadable documents.
    #[serde(default = "default_document_types")]
    pub allowed_document_types: Vec<String>,
    /// Subdirectory of the root that holds documents.
    #[serde(default = "default_document_dir")]
    pub document_dir: String,
    /// Placeholder portrait used when a staff member has no photo,
    /// relative to the root. Never deleted by the application.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root(),
            public_prefix: default_public_prefix(),
            max_upload_size_bytes: default_max_upload(),
            allowed_image_types: default_image_types(),
            image_dir: default_image_dir(),
            allowed_document_types: default_document_types(),
            document_dir: default_document_dir(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

impl StorageConfig {
    /// Public URL of a path relative to the root.
    pub fn public_path(&self, relative: &str) -> String {
        format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            relative.trim_start_matches('/')
        )
    }
}

fn default_root() -> String {
    "./static".to_string()
}

fn default_public_prefix() -> String {
    "/static".to_string()
}

fn default_max_upload() -> u64 {
    10_485_760 // 10 MB
}

fn default_image_types() -> Vec<String> {
    vec!["image/jpeg".to_string(), "image/png".to_string()]
}

fn default_image_dir() -> String {
    "images".to_string()
}

fn default_document_types() -> Vec<String> {
    vec!["application/pdf".to_string()]
}

fn default_document_dir() -> String {
    "pdfs".to_string()
}

fn default_placeholder_image() -> String {
    "images/default.png".to_string()
}
