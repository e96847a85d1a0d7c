//! Menu and submenu repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use tmsiti_core::error::{AppError, ErrorKind};
use tmsiti_core::result::AppResult;
use tmsiti_entity::menu::{
    CreateMenu, CreateSubMenu, Menu, MenuWithSubmenus, SubMenu, UpdateMenu, UpdateSubMenu,
};

use super::is_foreign_key_violation;

/// Repository for navigation menus and their submenus.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Create a new menu repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ── Menus ────────────────────────────────────────────────────

    /// Find a menu by primary key.
    pub async fn find_menu(&self, id: i64) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menus WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find menu", e))
    }

    /// List all menus with their submenus nested, both ordered by id.
    pub async fn find_tree(&self) -> AppResult<Vec<MenuWithSubmenus>> {
        let menus = sqlx::query_as::<_, Menu>("SELECT * FROM menus ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list menus", e))?;
        let submenus = sqlx::query_as::<_, SubMenu>("SELECT * FROM submenus ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list submenus", e)
            })?;
        Ok(MenuWithSubmenus::assemble(menus, submenus))
    }

    /// Insert a menu.
    pub async fn create_menu(&self, data: &CreateMenu) -> AppResult<Menu> {
        sqlx::query_as::<_, Menu>(
            "INSERT INTO menus (title, url, created_at) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create menu", e))
    }

    /// Apply a partial update. Returns `None` when the row does not exist.
    pub async fn update_menu(&self, id: i64, data: &UpdateMenu) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>(
            "UPDATE menus SET title = COALESCE(?, title), url = COALESCE(?, url) \
             WHERE id = ? RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update menu", e))
    }

    /// Delete a menu. Its submenus are removed by the cascading foreign key.
    pub async fn delete_menu(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM menus WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete menu", e))?;
        Ok(result.rows_affected() > 0)
    }

    // ── Submenus ─────────────────────────────────────────────────

    /// Find a submenu by primary key.
    pub async fn find_submenu(&self, id: i64) -> AppResult<Option<SubMenu>> {
        sqlx::query_as::<_, SubMenu>("SELECT * FROM submenus WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find submenu", e))
    }

    /// List submenus of one menu.
    pub async fn find_submenus(&self, menu_id: i64) -> AppResult<Vec<SubMenu>> {
        sqlx::query_as::<_, SubMenu>("SELECT * FROM submenus WHERE menu_id = ? ORDER BY id")
            .bind(menu_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list submenus", e)
            })
    }

    /// Insert a submenu. An unknown parent maps to `NotFound`.
    pub async fn create_submenu(&self, data: &CreateSubMenu) -> AppResult<SubMenu> {
        sqlx::query_as::<_, SubMenu>(
            "INSERT INTO submenus (title, url, menu_id, created_at) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.url)
        .bind(data.menu_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::not_found(format!("Menu {} not found", data.menu_id))
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create submenu", e)
            }
        })
    }

    /// Apply a partial update. Returns `None` when the row does not exist.
    pub async fn update_submenu(
        &self,
        id: i64,
        data: &UpdateSubMenu,
    ) -> AppResult<Option<SubMenu>> {
        sqlx::query_as::<_, SubMenu>(
            "UPDATE submenus SET title = COALESCE(?, title), url = COALESCE(?, url), \
             menu_id = COALESCE(?, menu_id) WHERE id = ? RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.url)
        .bind(data.menu_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::not_found("Parent menu not found")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to update submenu", e)
            }
        })
    }

    /// Delete a submenu. Returns `false` when the row does not exist.
    pub async fn delete_submenu(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM submenus WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete submenu", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
