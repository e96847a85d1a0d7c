//! Core traits shared across crates.

pub mod storage;

pub use storage::StorageProvider;
