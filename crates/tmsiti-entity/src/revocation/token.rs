//! Revoked token rows.

/// Data required to record a revocation.
///
/// Only the SHA-256 hex digest of the token string is stored.
#[derive(Debug, Clone)]
pub struct NewRevokedToken {
    /// Hex-encoded SHA-256 of the bearer token string.
    pub token_digest: String,
    /// The token's embedded expiry in unix seconds.
    pub expires_at: i64,
}
