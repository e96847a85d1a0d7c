//! Menu and submenu models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A top-level navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Menu {
    /// Auto-incremented identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Optional link target.
    pub url: Option<String>,
    /// When the menu was created.
    pub created_at: DateTime<Utc>,
}

/// A navigation entry nested under a [`Menu`]. Deleted with its parent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubMenu {
    /// Auto-incremented identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Optional link target.
    pub url: Option<String>,
    /// Parent menu.
    pub menu_id: i64,
    /// When the submenu was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a menu.
#[derive(Debug, Clone)]
pub struct CreateMenu {
    pub title: String,
    pub url: Option<String>,
}

/// Partial update for a menu.
#[derive(Debug, Clone, Default)]
pub struct UpdateMenu {
    pub title: Option<String>,
    pub url: Option<String>,
}

/// Data required to insert a submenu.
#[derive(Debug, Clone)]
pub struct CreateSubMenu {
    pub title: String,
    pub url: Option<String>,
    pub menu_id: i64,
}

/// Partial update for a submenu.
#[derive(Debug, Clone, Default)]
pub struct UpdateSubMenu {
    pub title: Option<String>,
    pub url: Option<String>,
    pub menu_id: Option<i64>,
}
