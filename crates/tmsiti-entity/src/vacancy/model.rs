//! Vacancy model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An open (or closed) position.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    /// Auto-incremented identifier.
    pub id: i64,
    /// Position title.
    pub title: String,
    /// Position description.
    pub description: String,
    /// Department the position belongs to.
    pub department: String,
    /// Whether the vacancy is still open.
    pub is_active: bool,
    /// When the vacancy was posted.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a vacancy.
#[derive(Debug, Clone)]
pub struct CreateVacancy {
    /// Position title.
    pub title: String,
    /// Position description.
    pub description: String,
    /// Department name.
    pub department: String,
    /// Whether the vacancy is open.
    pub is_active: bool,
}

/// Partial update for a vacancy.
#[derive(Debug, Clone, Default)]
pub struct UpdateVacancy {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New open flag.
    pub is_active: Option<bool>,
}
