//! Login and admin registration.

use std::sync::Arc;

use tracing::{info, warn};

use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_database::repositories::AdminRepository;
use tmsiti_entity::admin::{Admin, CreateAdmin};

use crate::jwt::{IssuedToken, TokenEncoder};
use crate::password::{CredentialValidator, PasswordHasher};

/// Verifies credentials, mints bearer tokens, and creates admins.
///
/// Issuing a token writes nothing to the database.
#[derive(Debug, Clone)]
pub struct CredentialIssuer {
    admins: AdminRepository,
    hasher: PasswordHasher,
    encoder: Arc<TokenEncoder>,
    validator: CredentialValidator,
}

impl CredentialIssuer {
    /// Creates a new issuer.
    pub fn new(
        admins: AdminRepository,
        hasher: PasswordHasher,
        encoder: Arc<TokenEncoder>,
        validator: CredentialValidator,
    ) -> Self {
        Self {
            admins,
            hasher,
            encoder,
            validator,
        }
    }

    /// Exchanges a username and password for a bearer token.
    ///
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials`.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<IssuedToken> {
        let Some(admin) = self.admins.find_by_username(username).await? else {
            self.hasher.burn(password);
            warn!(username = %username, "Login failed: unknown username");
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify(password, &admin.hashed_password)? {
            warn!(username = %username, "Login failed: wrong password");
            return Err(AppError::invalid_credentials());
        }

        let token = self.encoder.issue(&admin.username)?;
        info!(admin_id = admin.id, username = %admin.username, "Admin logged in");
        Ok(token)
    }

    /// Creates a new admin on behalf of an authenticated admin.
    pub async fn register(
        &self,
        new_username: &str,
        new_password: &str,
        requesting_admin: &Admin,
    ) -> AppResult<Admin> {
        let admin = self.provision(new_username, new_password).await?;
        info!(
            admin_id = admin.id,
            username = %admin.username,
            created_by = %requesting_admin.username,
            "Admin registered"
        );
        Ok(admin)
    }

    /// Creates an admin without a requesting session.
    ///
    /// Used by the command line to bootstrap the first account.
    pub async fn provision(&self, username: &str, password: &str) -> AppResult<Admin> {
        let username = self.validator.username(username)?;
        self.validator.password(password)?;

        if self.admins.find_by_username(username).await?.is_some() {
            return Err(AppError::duplicate_username(username));
        }

        let hashed_password = self.hasher.hash(password)?;
        self.admins
            .create(&CreateAdmin {
                username: username.to_string(),
                hashed_password,
            })
            .await
    }
}
