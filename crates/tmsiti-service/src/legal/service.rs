//! Legal act service.

use tracing::info;

use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_core::types::pagination::OffsetRequest;
use tmsiti_database::repositories::LegalActRepository;
use tmsiti_entity::legal::{CreateLegalAct, LegalAct, LegalActKind, UpdateLegalAct};

use crate::context::RequestContext;

/// Handles legal acts.
#[derive(Debug, Clone)]
pub struct LegalActService {
    repo: LegalActRepository,
}

impl LegalActService {
    /// Creates a new legal act service.
    pub fn new(repo: LegalActRepository) -> Self {
        Self { repo }
    }

    /// Lists legal acts, most recently adopted first.
    pub async fn list(
        &self,
        kind: Option<LegalActKind>,
        window: &OffsetRequest,
    ) -> AppResult<Vec<LegalAct>> {
        self.repo.find_window(kind, window).await
    }

    /// Gets one legal act.
    pub async fn get(&self, id: i64) -> AppResult<LegalAct> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Legal act not found"))
    }

    /// Creates a legal act.
    pub async fn create(&self, ctx: &RequestContext, data: CreateLegalAct) -> AppResult<LegalAct> {
        let act = self.repo.create(&data).await?;
        info!(legal_act_id = act.id, kind = %act.kind, admin = %ctx.username, "Legal act created");
        Ok(act)
    }

    /// Applies a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateLegalAct,
    ) -> AppResult<LegalAct> {
        let act = self
            .repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Legal act not found"))?;
        info!(legal_act_id = id, admin = %ctx.username, "Legal act updated");
        Ok(act)
    }

    /// Deletes a legal act.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Legal act not found"));
        }
        info!(legal_act_id = id, admin = %ctx.username, "Legal act deleted");
        Ok(())
    }
}
