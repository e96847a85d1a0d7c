//! News article model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A published news article with a cover image.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct News {
    /// Auto-incremented identifier.
    pub id: i64,
    /// Headline.
    pub name: String,
    /// Article body.
    pub text: String,
    /// Public path of the cover image, e.g. `/static/images/<file>`.
    pub image_path: String,
    /// When the article was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert an article.
#[derive(Debug, Clone)]
pub struct CreateNews {
    /// Headline.
    pub name: String,
    /// Article body.
    pub text: String,
    /// Public path of the stored image.
    pub image_path: String,
}

/// Partial update for an article. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateNews {
    /// New headline.
    pub name: Option<String>,
    /// New body.
    pub text: Option<String>,
    /// New image path.
    pub image_path: Option<String>,
}
