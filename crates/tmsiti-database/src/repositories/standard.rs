//! Standard document repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use tmsiti_core::error::{AppError, ErrorKind};
use tmsiti_core::result::AppResult;
use tmsiti_core::types::pagination::{PageRequest, PageResponse};
use tmsiti_entity::standard::{CreateStandard, Standard, UpdateStandard};

use crate::paginate::{ListQuery, paginate};

/// Repository for published standards.
#[derive(Debug, Clone)]
pub struct StandardRepository {
    pool: SqlitePool,
}

impl StandardRepository {
    /// Create a new standard repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a standard by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Standard>> {
        sqlx::query_as::<_, Standard>("SELECT * FROM standards WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find standard", e))
    }

    /// List standards ordered by id.
    pub async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<Standard>> {
        paginate(&self.pool, &ListQuery::new("standards"), page).await
    }

    /// Insert a standard.
    pub async fn create(&self, data: &CreateStandard) -> AppResult<Standard> {
        sqlx::query_as::<_, Standard>(
            "INSERT INTO standards (name, description, pdf_path, created_at) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.pdf_path)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create standard", e))
    }

    /// Apply a partial update. Returns `None` when the row does not exist.
    pub async fn update(&self, id: i64, data: &UpdateStandard) -> AppResult<Option<Standard>> {
        sqlx::query_as::<_, Standard>(
            "UPDATE standards SET name = COALESCE(?, name), \
             description = COALESCE(?, description), pdf_path = COALESCE(?, pdf_path) \
             WHERE id = ? RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.pdf_path)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update standard", e))
    }

    /// Delete a standard. Returns `false` when the row does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM standards WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete standard", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
