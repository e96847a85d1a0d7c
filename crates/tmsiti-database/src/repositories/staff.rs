//! Staff directory repository implementation.

use sqlx::SqlitePool;

use tmsiti_core::error::{AppError, ErrorKind};
use tmsiti_core::result::AppResult;
use tmsiti_entity::staff::{StaffMember, StaffProfile, UpdateStaffProfile};

/// Repository for the leadership directory.
#[derive(Debug, Clone)]
pub struct StaffRepository {
    pool: SqlitePool,
}

impl StaffRepository {
    /// Create a new staff repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a staff member by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<StaffMember>> {
        sqlx::query_as::<_, StaffMember>("SELECT * FROM staff WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find staff member", e)
            })
    }

    /// The whole directory ordered by id. It is small enough to skip paging.
    pub async fn find_all(&self) -> AppResult<Vec<StaffMember>> {
        sqlx::query_as::<_, StaffMember>("SELECT * FROM staff ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list staff", e))
    }

    /// Insert a staff member with the given portrait path.
    pub async fn create(&self, profile: &StaffProfile, image_path: &str) -> AppResult<StaffMember> {
        sqlx::query_as::<_, StaffMember>(
            "INSERT INTO staff (position, full_name, reception_days, phone, email, \
             specialization, image_path) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&profile.position)
        .bind(&profile.full_name)
        .bind(&profile.reception_days)
        .bind(&profile.phone)
        .bind(&profile.email)
        .bind(&profile.specialization)
        .bind(image_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create staff member", e))
    }

    /// Apply a partial update. Returns `None` when the row does not exist.
    pub async fn update(
        &self,
        id: i64,
        changes: &UpdateStaffProfile,
        image_path: Option<&str>,
    ) -> AppResult<Option<StaffMember>> {
        sqlx::query_as::<_, StaffMember>(
            "UPDATE staff SET position = COALESCE(?, position), \
             full_name = COALESCE(?, full_name), reception_days = COALESCE(?, reception_days), \
             phone = COALESCE(?, phone), email = COALESCE(?, email), \
             specialization = COALESCE(?, specialization), image_path = COALESCE(?, image_path) \
             WHERE id = ? RETURNING *",
        )
        .bind(&changes.position)
        .bind(&changes.full_name)
        .bind(&changes.reception_days)
        .bind(&changes.phone)
        .bind(&changes.email)
        .bind(&changes.specialization)
        .bind(image_path)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update staff member", e))
    }

    /// Delete a staff member. Returns `false` when the row does not exist.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM staff WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete staff member", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
