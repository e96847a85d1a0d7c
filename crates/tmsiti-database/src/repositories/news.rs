//! News repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use tmsiti_core::error::{AppError, ErrorKind};
use tmsiti_core::result::AppResult;
use tmsiti_core::types::filter::FilterField;
use tmsiti_core::types::pagination::{PageRequest, PageResponse};
use tmsiti_entity::news::{CreateNews, News, UpdateNews};

use crate::paginate::{ListQuery, paginate};

/// Repository for news articles.
#[derive(Debug, Clone)]
pub struct NewsRepository {
    pool: SqlitePool,
}

impl NewsRepository {
    /// Create a new news repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find an article by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<News>> {
        sqlx::query_as::<_, News>("SELECT * FROM news WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find news", e))
    }

    /// List articles ordered by id, optionally filtered by a headline substring.
    pub async fn find_page(
        &self,
        name_contains: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<News>> {
        let query = ListQuery::new("news")
            .filter_opt(name_contains.map(|q| FilterField::contains("name", q)));
        paginate(&self.pool, &query, page).await
    }

    /// Insert an article.
    pub async fn create(&self, data: &CreateNews) -> AppResult<News> {
        sqlx::query_as::<_, News>(
            "INSERT INTO news (name, text, image_path, created_at) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.text)
        .bind(&data.image_path)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create news", e))
    }

    /// Apply a partial update. Returns `None` when the row does not exist.
    pub async fn update(&self, id: i64, data: &UpdateNews) -> AppResult<Option<News>> {
        sqlx::query_as::<_, News>(
            "UPDATE news SET name = COALESCE(?, name), text = COALESCE(?, text), \
             image_path = COALESCE(?, image_path) WHERE id = ? RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.text)
        .bind(&data.image_path)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update news", e))
    }

    /// Delete an article. Returns `false` when the row does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete news", e))?;
        Ok(result.rows_affected() > 0)
    }
}
