//! Standard document handlers.
//!
//! Create and update take `multipart/form-data` with `name`, an optional
//! `description`, and a `pdf` file part.

use axum::Json;
use axum::extract::State;

use tmsiti_core::types::pagination::PageResponse;
use tmsiti_entity::standard::Standard;
use tmsiti_service::standard::UpdateStandardInput;

use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::multipart::check_max_chars;
use crate::extractors::{CurrentAdmin, MultipartForm, Page, PathId};
use crate::state::AppState;

const NAME_MAX: usize = 255;

/// GET /standartlar
pub async fn list(
    State(state): State<AppState>,
    Page(page): Page,
) -> ApiResult<Json<PageResponse<Standard>>> {
    Ok(Json(state.standards.list(&page).await?))
}

/// GET /standartlar/{id}
pub async fn get(State(state): State<AppState>, PathId(id): PathId) -> ApiResult<Json<Standard>> {
    Ok(Json(state.standards.get(id).await?))
}

/// POST /standartlar/for_admin/
pub async fn create(
    State(state): State<AppState>,
    session: CurrentAdmin,
    mut form: MultipartForm,
) -> ApiResult<Json<Standard>> {
    let name = form.required("name")?;
    check_max_chars(&name, "name", NAME_MAX)?;
    let description = form.text("description").filter(|d| !d.is_empty());
    let pdf = form.required_file("pdf")?;

    let standard = state
        .standards
        .create(&session.context(), name, description, pdf)
        .await?;
    Ok(Json(standard))
}

/// PUT /standartlar/{id}/for_admin/
pub async fn update(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
    mut form: MultipartForm,
) -> ApiResult<Json<Standard>> {
    let name = form.optional("name")?;
    if let Some(name) = &name {
        check_max_chars(name, "name", NAME_MAX)?;
    }
    let input = UpdateStandardInput {
        name,
        description: form.text("description"),
    };

    let standard = state
        .standards
        .update(&session.context(), id, input, form.file("pdf"))
        .await?;
    Ok(Json(standard))
}

/// DELETE /standartlar/{id}/for_admin/
pub async fn delete(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    state.standards.delete(&session.context(), id).await?;
    Ok(Json(MessageResponse::new("Standard deleted")))
}
