//! Vacancy repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use tmsiti_core::error::{AppError, ErrorKind};
use tmsiti_core::result::AppResult;
use tmsiti_core::types::filter::FilterField;
use tmsiti_core::types::pagination::OffsetRequest;
use tmsiti_core::types::sorting::SortField;
use tmsiti_entity::vacancy::{CreateVacancy, UpdateVacancy, Vacancy};

use crate::paginate::{ListQuery, fetch_window};

/// Repository for vacancies.
#[derive(Debug, Clone)]
pub struct VacancyRepository {
    pool: SqlitePool,
}

impl VacancyRepository {
    /// Create a new vacancy repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a vacancy by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Vacancy>> {
        sqlx::query_as::<_, Vacancy>("SELECT * FROM vacancies WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find vacancy", e))
    }

    /// List vacancies newest first.
    pub async fn find_window(
        &self,
        is_active: Option<bool>,
        window: &OffsetRequest,
    ) -> AppResult<Vec<Vacancy>> {
        let query = ListQuery::new("vacancies")
            .filter_opt(is_active.map(|flag| FilterField::flag("is_active", flag)))
            .order_by(SortField::desc("created_at"));
        fetch_window(&self.pool, &query, window).await
    }

    /// Insert a vacancy.
    pub async fn create(&self, data: &CreateVacancy) -> AppResult<Vacancy> {
        sqlx::query_as::<_, Vacancy>(
            "INSERT INTO vacancies (title, description, department, is_active, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.department)
        .bind(data.is_active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create vacancy", e))
    }

    /// Apply a partial update. Returns `None` when the row does not exist.
    pub async fn update(&self, id: i64, data: &UpdateVacancy) -> AppResult<Option<Vacancy>> {
        sqlx::query_as::<_, Vacancy>(
            "UPDATE vacancies SET title = COALESCE(?, title), description = COALESCE(?, description), \
             department = COALESCE(?, department), is_active = COALESCE(?, is_active) \
             WHERE id = ? RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.department)
        .bind(data.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update vacancy", e))
    }

    /// Delete a vacancy. Returns `false` when the row does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vacancies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete vacancy", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
