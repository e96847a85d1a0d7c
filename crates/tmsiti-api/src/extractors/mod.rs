//! Custom Axum extractors.

pub mod auth;
pub mod body;
pub mod multipart;
pub mod pagination;
pub mod path;

pub use auth::CurrentAdmin;
pub use body::{FormBody, JsonBody, QueryParams};
pub use multipart::MultipartForm;
pub use pagination::{Offset, Page};
pub use path::PathId;
