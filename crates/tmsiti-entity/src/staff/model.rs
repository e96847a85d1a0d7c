//! Staff member model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person listed in the institute's leadership directory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StaffMember {
    /// Auto-incremented identifier.
    pub id: i64,
    /// Job title.
    pub position: String,
    pub full_name: String,
    /// Days and hours the person receives visitors.
    pub reception_days: String,
    pub phone: String,
    pub email: String,
    pub specialization: String,
    /// Public path of the portrait, or of the shared placeholder.
    pub image_path: String,
}

/// Descriptive fields of a staff member, all required on insert.
#[derive(Debug, Clone)]
pub struct StaffProfile {
    pub position: String,
    pub full_name: String,
    pub reception_days: String,
    pub phone: String,
    pub email: String,
    pub specialization: String,
}

/// Partial update for a staff member. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateStaffProfile {
    pub position: Option<String>,
    pub full_name: Option<String>,
    pub reception_days: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub specialization: Option<String>,
}
