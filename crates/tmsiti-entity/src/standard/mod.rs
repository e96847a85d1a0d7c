//! Published standards with a downloadable PDF.

pub mod model;

pub use model::{CreateStandard, Standard, UpdateStandard};
