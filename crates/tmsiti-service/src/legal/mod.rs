//! Laws, resolutions, and decrees.

pub mod service;

pub use service::LegalActService;
