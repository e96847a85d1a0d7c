//! Standard document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A building standard published as a PDF.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Standard {
    /// Auto-incremented identifier.
    pub id: i64,
    /// Title, at most 255 characters.
    pub name: String,
    /// Short summary.
    pub description: Option<String>,
    /// Public path of the document, e.g. `/static/pdfs/<file>`.
    pub pdf_path: String,
    /// When the standard was added.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a standard.
#[derive(Debug, Clone)]
pub struct CreateStandard {
    pub name: String,
    pub description: Option<String>,
    pub pdf_path: String,
}

/// Partial update for a standard. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateStandard {
    pub name: Option<String>,
    pub description: Option<String>,
    pub pdf_path: Option<String>,
}
