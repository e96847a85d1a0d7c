//! Legal act repository implementation.

use sqlx::SqlitePool;

use tmsiti_core::error::{AppError, ErrorKind};
use tmsiti_core::result::AppResult;
use tmsiti_core::types::filter::FilterField;
use tmsiti_core::types::pagination::OffsetRequest;
use tmsiti_core::types::sorting::SortField;
use tmsiti_entity::legal::{CreateLegalAct, LegalAct, LegalActKind, UpdateLegalAct};

use crate::paginate::{ListQuery, fetch_window};

/// Repository for laws, resolutions, and decrees.
#[derive(Debug, Clone)]
pub struct LegalActRepository {
    pool: SqlitePool,
}

impl LegalActRepository {
    /// Create a new legal act repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a legal act by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<LegalAct>> {
        sqlx::query_as::<_, LegalAct>("SELECT * FROM legal_acts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find legal act", e))
    }

    /// List legal acts by adoption date, most recent first.
    pub async fn find_window(
        &self,
        kind: Option<LegalActKind>,
        window: &OffsetRequest,
    ) -> AppResult<Vec<LegalAct>> {
        let query = ListQuery::new("legal_acts")
            .filter_opt(kind.map(|k| FilterField::eq("kind", k.as_str())))
            .order_by(SortField::desc("date"));
        fetch_window(&self.pool, &query, window).await
    }

    /// Insert a legal act.
    pub async fn create(&self, data: &CreateLegalAct) -> AppResult<LegalAct> {
        sqlx::query_as::<_, LegalAct>(
            "INSERT INTO legal_acts (title, kind, content, number, date, source) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.title)
        .bind(data.kind)
        .bind(&data.content)
        .bind(&data.number)
        .bind(data.date)
        .bind(&data.source)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create legal act", e))
    }

    /// Apply a partial update. Returns `None` when the row does not exist.
    pub async fn update(&self, id: i64, data: &UpdateLegalAct) -> AppResult<Option<LegalAct>> {
        sqlx::query_as::<_, LegalAct>(
            "UPDATE legal_acts SET title = COALESCE(?, title), kind = COALESCE(?, kind), \
             content = COALESCE(?, content), number = COALESCE(?, number), \
             date = COALESCE(?, date), source = COALESCE(?, source) \
             WHERE id = ? RETURNING *",
        )
        .bind(&data.title)
        .bind(data.kind)
        .bind(&data.content)
        .bind(&data.number)
        .bind(data.date)
        .bind(&data.source)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update legal act", e))
    }

    /// Delete a legal act. Returns `false` when the row does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM legal_acts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete legal act", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
