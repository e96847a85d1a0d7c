//! Vacancy handlers. Create and update take form-encoded bodies.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use tmsiti_entity::vacancy::Vacancy;

use crate::dto::request::{VacancyForm, VacancyUpdateForm};
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{CurrentAdmin, FormBody, Offset, PathId, QueryParams};
use crate::state::AppState;

/// Optional list filter.
#[derive(Debug, Deserialize)]
pub struct VacancyFilter {
    pub is_active: Option<bool>,
}

/// GET /vakansiyalar
pub async fn list(
    State(state): State<AppState>,
    Offset(window): Offset,
    QueryParams(filter): QueryParams<VacancyFilter>,
) -> ApiResult<Json<Vec<Vacancy>>> {
    Ok(Json(state.vacancies.list(filter.is_active, &window).await?))
}

/// GET /vakansiyalar/{id}
pub async fn get(State(state): State<AppState>, PathId(id): PathId) -> ApiResult<Json<Vacancy>> {
    Ok(Json(state.vacancies.get(id).await?))
}

/// POST /vakansiyalar/for_admin/
pub async fn create(
    State(state): State<AppState>,
    session: CurrentAdmin,
    FormBody(form): FormBody<VacancyForm>,
) -> ApiResult<Json<Vacancy>> {
    let data = form.into_create()?;
    Ok(Json(state.vacancies.create(&session.context(), data).await?))
}

/// PUT /vakansiyalar/{id}/for_admin/
pub async fn update(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
    FormBody(form): FormBody<VacancyUpdateForm>,
) -> ApiResult<Json<Vacancy>> {
    let data = form.into_update()?;
    Ok(Json(
        state.vacancies.update(&session.context(), id, data).await?,
    ))
}

/// DELETE /vakansiyalar/{id}/for_admin/
pub async fn delete(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    state.vacancies.delete(&session.context(), id).await?;
    Ok(Json(MessageResponse::new("Vacancy deleted")))
}
