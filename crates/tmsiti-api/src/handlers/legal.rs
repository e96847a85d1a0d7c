//! Legal act handlers (laws, resolutions, decrees).

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use tmsiti_core::error::AppError;
use tmsiti_entity::legal::{LegalAct, LegalActKind};

use crate::dto::request::{LegalActForm, LegalActUpdateForm};
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{CurrentAdmin, FormBody, Offset, PathId, QueryParams};
use crate::state::AppState;

/// Optional list filter.
#[derive(Debug, Deserialize)]
pub struct LegalActFilter {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// GET /qonun-qaror-farmonlar
pub async fn list(
    State(state): State<AppState>,
    Offset(window): Offset,
    QueryParams(filter): QueryParams<LegalActFilter>,
) -> ApiResult<Json<Vec<LegalAct>>> {
    let kind = filter
        .kind
        .as_deref()
        .map(|k| {
            k.parse::<LegalActKind>()
                .map_err(|e| AppError::invalid_argument(e.message))
        })
        .transpose()?;
    Ok(Json(state.legal_acts.list(kind, &window).await?))
}

/// GET /qonun-qaror-farmonlar/{id}
pub async fn get(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<Json<LegalAct>> {
    Ok(Json(state.legal_acts.get(id).await?))
}

/// POST /qonun-qaror-farmonlar/for_admin/
pub async fn create(
    State(state): State<AppState>,
    session: CurrentAdmin,
    FormBody(form): FormBody<LegalActForm>,
) -> ApiResult<Json<LegalAct>> {
    let data = form.into_create()?;
    Ok(Json(state.legal_acts.create(&session.context(), data).await?))
}

/// PUT /qonun-qaror-farmonlar/{id}/for_admin/
pub async fn update(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
    FormBody(form): FormBody<LegalActUpdateForm>,
) -> ApiResult<Json<LegalAct>> {
    let data = form.into_update()?;
    Ok(Json(
        state.legal_acts.update(&session.context(), id, data).await?,
    ))
}

/// DELETE /qonun-qaror-farmonlar/{id}/for_admin/
pub async fn delete(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    state.legal_acts.delete(&session.context(), id).await?;
    Ok(Json(MessageResponse::new("Legal act deleted")))
}
