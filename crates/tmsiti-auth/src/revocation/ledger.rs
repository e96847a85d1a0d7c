//! Persistent denylist of bearer tokens that were logged out.
//!
//! Only the SHA-256 digest of the token string is stored. A lookup is a
//! single indexed read and never inspects the token itself, so anything
//! that was revoked is rejected regardless of its signature.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use tmsiti_core::result::AppResult;
use tmsiti_database::repositories::RevokedTokenRepository;
use tmsiti_entity::revocation::NewRevokedToken;

/// Result of a revoke call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevokeOutcome {
    /// The token was added to the ledger.
    Revoked,
    /// The token was already in the ledger; nothing changed.
    AlreadyRevoked,
}

/// Hex-encoded SHA-256 of a token string.
pub fn token_digest(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

/// Records and answers questions about revoked tokens.
#[derive(Debug, Clone)]
pub struct RevocationLedger {
    repo: RevokedTokenRepository,
}

impl RevocationLedger {
    /// Creates a ledger backed by the given repository.
    pub fn new(repo: RevokedTokenRepository) -> Self {
        Self { repo }
    }

    /// Adds `token` to the ledger.
    ///
    /// `expires_at` is the token's own expiry in unix seconds; the row can
    /// be pruned once it has passed. Revoking twice is a no-op.
    pub async fn revoke(
        &self,
        token: &str,
        expires_at: i64,
        revoked_by: &str,
    ) -> AppResult<RevokeOutcome> {
        let inserted = self
            .repo
            .insert_if_absent(&NewRevokedToken {
                token_digest: token_digest(token),
                expires_at,
            })
            .await?;

        if inserted {
            info!(admin = %revoked_by, "Token revoked");
            Ok(RevokeOutcome::Revoked)
        } else {
            debug!(admin = %revoked_by, "Token was already revoked");
            Ok(RevokeOutcome::AlreadyRevoked)
        }
    }

    /// Whether `token` has been revoked.
    pub async fn is_revoked(&self, token: &str) -> AppResult<bool> {
        self.repo.exists(&token_digest(token)).await
    }

    /// Removes entries whose token expired before `now`.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        self.repo.delete_expired_before(now.timestamp()).await
    }

    /// Number of entries currently in the ledger.
    pub async fn count(&self) -> AppResult<i64> {
        self.repo.count().await
    }
}
