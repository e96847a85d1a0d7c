//! Standards published as downloadable PDFs.

pub mod service;

pub use service::{StandardService, UpdateStandardInput};
