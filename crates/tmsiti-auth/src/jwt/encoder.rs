//! Bearer token issuing.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tmsiti_core::config::AuthConfig;
use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;

use super::claims::Claims;

/// A freshly signed bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The compact JWT string.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Creates HS256-signed bearer tokens.
#[derive(Clone)]
pub struct TokenEncoder {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails when the TTL does not fit a `chrono::Duration`.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let ttl = i64::try_from(config.token_ttl_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token_ttl_minutes out of range: {}",
                    config.token_ttl_minutes
                ))
            })?;
        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
        })
    }

    /// Issues a token for `username` valid from now.
    pub fn issue(&self, username: &str) -> Result<IssuedToken, AppError> {
        self.issue_at(username, Utc::now())
    }

    /// Issues a token for `username` as if the current time were `now`.
    pub fn issue_at(&self, username: &str, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let expires_at = now + self.ttl;
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken {
            access_token,
            token_type: "bearer".to_string(),
            expires_at,
        })
    }
}
