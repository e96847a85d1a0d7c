//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Bearer-token and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token validity window in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Allowed clock skew in seconds when checking expiry.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Minimum password length for newly registered admins.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            leeway_seconds: 0,
            password_min_length: default_password_min(),
        }
    }
}

impl AuthConfig {
    /// Placeholder signing secret shipped in the default configuration.
    pub const PLACEHOLDER_SECRET: &'static str = "CHANGE_ME_IN_PRODUCTION";

    /// `true` when tokens would be signed with the published placeholder
    /// or an empty secret.
    pub fn uses_placeholder_secret(&self) -> bool {
        let secret = self.jwt_secret.trim();
        secret.is_empty() || secret == Self::PLACEHOLDER_SECRET
    }
}

fn default_jwt_secret() -> String {
    AuthConfig::PLACEHOLDER_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    8
}
