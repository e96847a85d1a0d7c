//! News article handlers.
//!
//! Create and update take `multipart/form-data` with `name`, `text`, and an
//! `image` file part.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use tmsiti_core::types::pagination::PageResponse;
use tmsiti_entity::news::News;
use tmsiti_service::news::UpdateNewsInput;

use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{CurrentAdmin, MultipartForm, Page, PathId, QueryParams};
use crate::state::AppState;

/// Optional list filter.
#[derive(Debug, Deserialize)]
pub struct NewsFilter {
    /// Headline substring.
    pub q: Option<String>,
}

/// GET /yangiliklar
pub async fn list(
    State(state): State<AppState>,
    Page(page): Page,
    QueryParams(filter): QueryParams<NewsFilter>,
) -> ApiResult<Json<PageResponse<News>>> {
    let result = state.news.list(filter.q.as_deref(), &page).await?;
    Ok(Json(result))
}

/// GET /yangiliklar/{id}
pub async fn get(State(state): State<AppState>, PathId(id): PathId) -> ApiResult<Json<News>> {
    Ok(Json(state.news.get(id).await?))
}

/// POST /yangiliklar/for_admin/
pub async fn create(
    State(state): State<AppState>,
    session: CurrentAdmin,
    mut form: MultipartForm,
) -> ApiResult<Json<News>> {
    let name = form.required("name")?;
    let text = form.required("text")?;
    let image = form.required_file("image")?;

    let news = state
        .news
        .create(&session.context(), name, text, image)
        .await?;
    Ok(Json(news))
}

/// PUT /yangiliklar/{id}/for_admin/
pub async fn update(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
    mut form: MultipartForm,
) -> ApiResult<Json<News>> {
    let input = UpdateNewsInput {
        name: form.optional("name")?,
        text: form.optional("text")?,
    };

    let news = state
        .news
        .update(&session.context(), id, input, form.file("image"))
        .await?;
    Ok(Json(news))
}

/// DELETE /yangiliklar/{id}/for_admin/
pub async fn delete(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    state.news.delete(&session.context(), id).await?;
    Ok(Json(MessageResponse::new("News deleted")))
}
