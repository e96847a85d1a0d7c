//! Admin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An operator allowed to mutate site content.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    /// Auto-incremented identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Argon2 PHC string. Never serialized.
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new admin.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    /// Desired username, already trimmed and validated.
    pub username: String,
    /// Pre-hashed password.
    pub hashed_password: String,
}
