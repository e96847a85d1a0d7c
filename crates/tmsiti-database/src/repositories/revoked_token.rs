//! Revoked token ledger repository.

use chrono::Utc;
use sqlx::SqlitePool;

use tmsiti_core::error::{AppError, ErrorKind};
use tmsiti_core::result::AppResult;
use tmsiti_entity::revocation::NewRevokedToken;

/// Repository for the revoked-token denylist.
#[derive(Debug, Clone)]
pub struct RevokedTokenRepository {
    pool: SqlitePool,
}

impl RevokedTokenRepository {
    /// Create a new revoked token repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a digest. Returns `false` when it was already present.
    pub async fn insert_if_absent(&self, data: &NewRevokedToken) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO revoked_tokens (token_digest, expires_at, revoked_at) VALUES (?, ?, ?) \
             ON CONFLICT (token_digest) DO NOTHING",
        )
        .bind(&data.token_digest)
        .bind(data.expires_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke token", e))?;
        Ok(result.rows_affected() == 1)
    }

    /// Check whether a digest is in the ledger.
    pub async fn exists(&self, token_digest: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM revoked_tokens WHERE token_digest = ?")
            .bind(token_digest)
            .fetch_one(&self.pool)
            .await
            .map(|n| n > 0)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check revoked token", e)
            })
    }

    /// Delete rows whose embedded expiry is strictly before `cutoff` (unix seconds).
    pub async fn delete_expired_before(&self, cutoff: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to prune revoked tokens", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Count ledger rows.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM revoked_tokens")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count revoked tokens", e)
            })
    }
}
