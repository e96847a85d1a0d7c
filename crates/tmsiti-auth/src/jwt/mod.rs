//! Bearer token creation and verification.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::TokenVerifier;
pub use encoder::{IssuedToken, TokenEncoder};
