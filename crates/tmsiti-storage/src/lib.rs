//! # tmsiti-storage
//!
//! Filesystem storage for uploaded images and documents, and the policy
//! that decides which uploads are accepted and where they are written.

pub mod providers;
pub mod upload;

pub use providers::local::LocalStorageProvider;
pub use upload::{FileStore, StoredFile, UploadPolicy};
