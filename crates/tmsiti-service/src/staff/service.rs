//! Staff directory service.
//!
//! A member without an uploaded portrait points at a shared placeholder
//! image. The placeholder is never removed when a member is updated or
//! deleted.

use tracing::info;

use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_database::repositories::StaffRepository;
use tmsiti_entity::staff::{StaffMember, StaffProfile, UpdateStaffProfile};
use tmsiti_storage::FileStore;

use crate::context::RequestContext;
use crate::upload::{FileUpload, discard, store_optional};

/// Handles the staff directory.
#[derive(Debug, Clone)]
pub struct StaffService {
    repo: StaffRepository,
    images: FileStore,
    placeholder: String,
}

impl StaffService {
    /// Creates a new staff service. `placeholder` is the public path used
    /// for members without a portrait.
    pub fn new(repo: StaffRepository, images: FileStore, placeholder: impl Into<String>) -> Self {
        Self {
            repo,
            images,
            placeholder: placeholder.into(),
        }
    }

    /// Lists the whole directory by id.
    pub async fn list(&self) -> AppResult<Vec<StaffMember>> {
        self.repo.find_all().await
    }

    /// Gets one staff member.
    pub async fn get(&self, id: i64) -> AppResult<StaffMember> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Staff member not found"))
    }

    /// Stores the portrait if one was sent, then inserts the member.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        profile: StaffProfile,
        image: Option<FileUpload>,
    ) -> AppResult<StaffMember> {
        let stored = store_optional(&self.images, image).await?;
        let image_path = stored
            .as_ref()
            .map_or(self.placeholder.as_str(), |s| s.public_path.as_str());

        match self.repo.create(&profile, image_path).await {
            Ok(member) => {
                info!(staff_id = member.id, admin = %ctx.username, "Staff member created");
                Ok(member)
            }
            Err(e) => {
                discard(&self.images, stored.as_ref()).await;
                Err(e)
            }
        }
    }

    /// Updates a member, replacing the portrait when a new one is given.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        changes: UpdateStaffProfile,
        image: Option<FileUpload>,
    ) -> AppResult<StaffMember> {
        let current = self.get(id).await?;
        let stored = store_optional(&self.images, image).await?;

        let image_path = stored.as_ref().map(|s| s.public_path.as_str());
        let updated = match self.repo.update(id, &changes, image_path).await {
            Ok(Some(member)) => member,
            Ok(None) => {
                discard(&self.images, stored.as_ref()).await;
                return Err(AppError::not_found("Staff member not found"));
            }
            Err(e) => {
                discard(&self.images, stored.as_ref()).await;
                return Err(e);
            }
        };

        if stored.is_some() {
            self.remove_portrait(&current.image_path).await;
        }

        info!(staff_id = id, admin = %ctx.username, "Staff member updated");
        Ok(updated)
    }

    /// Deletes a member and then their own portrait.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let current = self.get(id).await?;
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Staff member not found"));
        }
        self.remove_portrait(&current.image_path).await;
        info!(staff_id = id, admin = %ctx.username, "Staff member deleted");
        Ok(())
    }

    async fn remove_portrait(&self, public_path: &str) {
        if public_path != self.placeholder {
            self.images.remove_public(public_path).await;
        }
    }
}
