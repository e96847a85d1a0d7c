//! Standard document service.
//!
//! Same file ordering as news: the PDF is written before its row, and a
//! replaced PDF is removed only once the row points at the new one.

use tracing::info;

use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_core::types::pagination::{PageRequest, PageResponse};
use tmsiti_database::repositories::StandardRepository;
use tmsiti_entity::standard::{CreateStandard, Standard, UpdateStandard};
use tmsiti_storage::FileStore;

use crate::context::RequestContext;
use crate::upload::{FileUpload, discard, store_optional};

/// Fields that may change on a standard.
#[derive(Debug, Clone, Default)]
pub struct UpdateStandardInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Handles standards and their PDF files.
#[derive(Debug, Clone)]
pub struct StandardService {
    repo: StandardRepository,
    documents: FileStore,
}

impl StandardService {
    /// Creates a new standard service.
    pub fn new(repo: StandardRepository, documents: FileStore) -> Self {
        Self { repo, documents }
    }

    /// Lists standards by id.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Standard>> {
        self.repo.find_page(page).await
    }

    /// Gets one standard.
    pub async fn get(&self, id: i64) -> AppResult<Standard> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Standard not found"))
    }

    /// Stores the PDF, then inserts the standard.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: String,
        description: Option<String>,
        pdf: FileUpload,
    ) -> AppResult<Standard> {
        let stored = pdf.store_in(&self.documents).await?;

        let result = self
            .repo
            .create(&CreateStandard {
                name,
                description,
                pdf_path: stored.public_path.clone(),
            })
            .await;

        match result {
            Ok(standard) => {
                info!(standard_id = standard.id, admin = %ctx.username, "Standard created");
                Ok(standard)
            }
            Err(e) => {
                discard(&self.documents, Some(&stored)).await;
                Err(e)
            }
        }
    }

    /// Updates a standard, replacing its PDF when a new one is given.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        input: UpdateStandardInput,
        pdf: Option<FileUpload>,
    ) -> AppResult<Standard> {
        let current = self.get(id).await?;
        let stored = store_optional(&self.documents, pdf).await?;

        let changes = UpdateStandard {
            name: input.name,
            description: input.description,
            pdf_path: stored.as_ref().map(|s| s.public_path.clone()),
        };
        let updated = match self.repo.update(id, &changes).await {
            Ok(Some(standard)) => standard,
            Ok(None) => {
                discard(&self.documents, stored.as_ref()).await;
                return Err(AppError::not_found("Standard not found"));
            }
            Err(e) => {
                discard(&self.documents, stored.as_ref()).await;
                return Err(e);
            }
        };

        if stored.is_some() {
            self.documents.remove_public(&current.pdf_path).await;
        }

        info!(standard_id = id, admin = %ctx.username, "Standard updated");
        Ok(updated)
    }

    /// Deletes a standard and then its PDF.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let current = self.get(id).await?;
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Standard not found"));
        }
        self.documents.remove_public(&current.pdf_path).await;
        info!(standard_id = id, admin = %ctx.username, "Standard deleted");
        Ok(())
    }
}
