//! News articles with cover images.

pub mod service;

pub use service::{NewsService, UpdateNewsInput};
