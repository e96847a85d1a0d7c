//! Legal act model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::kind::LegalActKind;

/// A published law, resolution, or decree.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LegalAct {
    /// Auto-incremented identifier.
    pub id: i64,
    /// Title of the act.
    pub title: String,
    /// Kind of act.
    #[serde(rename = "type")]
    pub kind: LegalActKind,
    /// Full text or summary.
    pub content: String,
    /// Official number.
    pub number: String,
    /// Adoption date.
    pub date: NaiveDate,
    /// Where the act was published.
    pub source: String,
}

/// Data required to insert a legal act.
#[derive(Debug, Clone)]
pub struct CreateLegalAct {
    pub title: String,
    pub kind: LegalActKind,
    pub content: String,
    pub number: String,
    pub date: NaiveDate,
    pub source: String,
}

/// Partial update for a legal act.
#[derive(Debug, Clone, Default)]
pub struct UpdateLegalAct {
    pub title: Option<String>,
    pub kind: Option<LegalActKind>,
    pub content: Option<String>,
    pub number: Option<String>,
    pub date: Option<NaiveDate>,
    pub source: Option<String>,
}
