//! Per-request bearer token checks.
//!
//! The guard runs once per protected request, before the handler body,
//! in a fixed order: revocation lookup, then signature and expiry, then
//! identity. A revoked token is rejected without verifying its signature.

use std::sync::Arc;

use tracing::debug;

use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_database::repositories::AdminRepository;
use tmsiti_entity::admin::Admin;

use crate::jwt::{Claims, TokenVerifier};
use crate::revocation::RevocationLedger;

/// An authenticated admin together with the token that proved it.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The resolved admin row.
    pub admin: Admin,
    /// The raw bearer token string.
    pub token: String,
    /// Verified claims of the token.
    pub claims: Claims,
}

/// Resolves a bearer token to an [`AdminSession`].
#[derive(Debug, Clone)]
pub struct SessionGuard {
    ledger: Arc<RevocationLedger>,
    verifier: Arc<TokenVerifier>,
    admins: AdminRepository,
}

impl SessionGuard {
    /// Creates a new guard.
    pub fn new(
        ledger: Arc<RevocationLedger>,
        verifier: Arc<TokenVerifier>,
        admins: AdminRepository,
    ) -> Self {
        Self {
            ledger,
            verifier,
            admins,
        }
    }

    /// Checks `token` and loads the admin it names.
    ///
    /// Revoked, invalid, or expired tokens yield `Unauthenticated`; a
    /// valid token whose admin no longer exists yields `NotFound`.
    pub async fn authenticate(&self, token: &str) -> AppResult<AdminSession> {
        if self.ledger.is_revoked(token).await? {
            debug!("Rejected revoked token");
            return Err(AppError::unauthenticated("Token already revoked"));
        }

        let claims = self.verifier.verify(token)?;

        let admin = self
            .admins
            .find_by_username(claims.username())
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))?;

        Ok(AdminSession {
            admin,
            token: token.to_string(),
            claims,
        })
    }
}
