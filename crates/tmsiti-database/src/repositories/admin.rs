//! Admin repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use tmsiti_core::error::{AppError, ErrorKind};
use tmsiti_core::result::AppResult;
use tmsiti_entity::admin::{Admin, CreateAdmin};

use super::is_unique_violation;

/// Repository for admin accounts.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: SqlitePool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find an admin by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find admin by id", e))
    }

    /// Find an admin by exact username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by username", e)
            })
    }

    /// List every admin ordered by id.
    pub async fn find_all(&self) -> AppResult<Vec<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list admins", e))
    }

    /// Count admins.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count admins", e))
    }

    /// Insert a new admin.
    ///
    /// A UNIQUE violation on `username` maps to `DuplicateUsername`.
    pub async fn create(&self, data: &CreateAdmin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (username, hashed_password, created_at) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.hashed_password)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::duplicate_username(&data.username)
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create admin", e)
            }
        })
    }

    /// Replace an admin's password hash.
    pub async fn update_password(&self, id: i64, hashed_password: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE admins SET hashed_password = ? WHERE id = ?")
            .bind(hashed_password)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update admin password", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
