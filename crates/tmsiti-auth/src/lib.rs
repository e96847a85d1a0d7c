//! # tmsiti-auth
//!
//! Admin authentication for the TMSITI CMS.
//!
//! ## Modules
//!
//! - `jwt`: bearer token issuing and verification
//! - `password`: Argon2id hashing and credential rules
//! - `revocation`: the revoked-token ledger and its periodic sweep
//! - `guard`: per-request token checks that resolve the calling admin
//! - `issuer`: login and admin registration

pub mod guard;
pub mod issuer;
pub mod jwt;
pub mod password;
pub mod revocation;

pub use guard::{AdminSession, SessionGuard};
pub use issuer::CredentialIssuer;
pub use jwt::{Claims, IssuedToken, TokenEncoder, TokenVerifier};
pub use password::{CredentialValidator, PasswordHasher};
pub use revocation::{RevocationLedger, RevocationSweeper, RevokeOutcome};
