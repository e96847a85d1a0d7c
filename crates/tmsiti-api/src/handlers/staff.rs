//! Leadership directory handlers.
//!
//! Create and update take `multipart/form-data`. The `image` part is
//! optional; members created without one get the placeholder portrait.

use axum::Json;
use axum::extract::State;

use tmsiti_core::result::AppResult;
use tmsiti_entity::staff::{StaffMember, StaffProfile, UpdateStaffProfile};

use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{CurrentAdmin, MultipartForm, PathId};
use crate::state::AppState;

fn profile(form: &mut MultipartForm) -> AppResult<StaffProfile> {
    Ok(StaffProfile {
        position: form.required("position")?,
        full_name: form.required("full_name")?,
        reception_days: form.required("reception_days")?,
        phone: form.required("phone")?,
        email: form.required("email")?,
        specialization: form.required("specialization")?,
    })
}

fn profile_changes(form: &mut MultipartForm) -> AppResult<UpdateStaffProfile> {
    Ok(UpdateStaffProfile {
        position: form.optional("position")?,
        full_name: form.optional("full_name")?,
        reception_days: form.optional("reception_days")?,
        phone: form.optional("phone")?,
        email: form.optional("email")?,
        specialization: form.optional("specialization")?,
    })
}

/// GET /rahbariyat
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<StaffMember>>> {
    Ok(Json(state.staff.list().await?))
}

/// GET /rahbariyat/{id}
pub async fn get(State(state): State<AppState>, PathId(id): PathId) -> ApiResult<Json<StaffMember>> {
    Ok(Json(state.staff.get(id).await?))
}

/// POST /rahbariyat/for_admin/
pub async fn create(
    State(state): State<AppState>,
    session: CurrentAdmin,
    mut form: MultipartForm,
) -> ApiResult<Json<StaffMember>> {
    let profile = profile(&mut form)?;
    let member = state
        .staff
        .create(&session.context(), profile, form.file("image"))
        .await?;
    Ok(Json(member))
}

/// PUT /rahbariyat/{id}/for_admin/
pub async fn update(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
    mut form: MultipartForm,
) -> ApiResult<Json<StaffMember>> {
    let changes = profile_changes(&mut form)?;
    let member = state
        .staff
        .update(&session.context(), id, changes, form.file("image"))
        .await?;
    Ok(Json(member))
}

/// DELETE /rahbariyat/{id}/for_admin/
pub async fn delete(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    state.staff.delete(&session.context(), id).await?;
    Ok(Json(MessageResponse::new("Staff member deleted")))
}
