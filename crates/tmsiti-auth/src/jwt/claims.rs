//! Claims carried by an admin bearer token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims payload embedded in every bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the admin's username.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Random token ID so tokens issued in the same second differ.
    pub jti: Uuid,
}

impl Claims {
    /// The username this token was issued to.
    pub fn username(&self) -> &str {
        &self.sub
    }
}
