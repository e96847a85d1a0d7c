//! Vacancy service.

use tracing::info;

use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_core::types::pagination::OffsetRequest;
use tmsiti_database::repositories::VacancyRepository;
use tmsiti_entity::vacancy::{CreateVacancy, UpdateVacancy, Vacancy};

use crate::context::RequestContext;

/// Handles vacancies.
#[derive(Debug, Clone)]
pub struct VacancyService {
    repo: VacancyRepository,
}

impl VacancyService {
    /// Creates a new vacancy service.
    pub fn new(repo: VacancyRepository) -> Self {
        Self { repo }
    }

    /// Lists vacancies newest first.
    pub async fn list(
        &self,
        is_active: Option<bool>,
        window: &OffsetRequest,
    ) -> AppResult<Vec<Vacancy>> {
        self.repo.find_window(is_active, window).await
    }

    /// Gets one vacancy.
    pub async fn get(&self, id: i64) -> AppResult<Vacancy> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Vacancy not found"))
    }

    /// Creates a vacancy.
    pub async fn create(&self, ctx: &RequestContext, data: CreateVacancy) -> AppResult<Vacancy> {
        let vacancy = self.repo.create(&data).await?;
        info!(vacancy_id = vacancy.id, admin = %ctx.username, "Vacancy created");
        Ok(vacancy)
    }

    /// Applies a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateVacancy,
    ) -> AppResult<Vacancy> {
        let vacancy = self
            .repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Vacancy not found"))?;
        info!(vacancy_id = id, admin = %ctx.username, "Vacancy updated");
        Ok(vacancy)
    }

    /// Deletes a vacancy.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Vacancy not found"));
        }
        info!(vacancy_id = id, admin = %ctx.username, "Vacancy deleted");
        Ok(())
    }
}
