//! Menu and submenu handlers. Bodies are JSON.

use axum::Json;
use axum::extract::State;

use tmsiti_entity::menu::{Menu, MenuWithSubmenus, SubMenu};

use crate::dto::request::{MenuRequest, MenuUpdateRequest, SubMenuRequest, SubMenuUpdateRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{CurrentAdmin, JsonBody, PathId};
use crate::state::AppState;

/// GET /menus
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<MenuWithSubmenus>>> {
    Ok(Json(state.menus.tree().await?))
}

/// GET /menus/{id}
pub async fn get(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<Json<MenuWithSubmenus>> {
    Ok(Json(state.menus.get_menu(id).await?))
}

/// POST /menus/for_admin/
pub async fn create(
    State(state): State<AppState>,
    session: CurrentAdmin,
    JsonBody(req): JsonBody<MenuRequest>,
) -> ApiResult<Json<Menu>> {
    let data = req.into_create()?;
    Ok(Json(state.menus.create_menu(&session.context(), data).await?))
}

/// PUT /menus/{id}/for_admin/
pub async fn update(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
    JsonBody(req): JsonBody<MenuUpdateRequest>,
) -> ApiResult<Json<Menu>> {
    let data = req.into_update()?;
    Ok(Json(
        state.menus.update_menu(&session.context(), id, data).await?,
    ))
}

/// DELETE /menus/{id}/for_admin/
pub async fn delete(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    state.menus.delete_menu(&session.context(), id).await?;
    Ok(Json(MessageResponse::new("Menu and its submenus deleted")))
}

/// GET /menus/submenus/{id}
pub async fn get_submenu(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<Json<SubMenu>> {
    Ok(Json(state.menus.get_submenu(id).await?))
}

/// POST /menus/submenus/for_admin/
pub async fn create_submenu(
    State(state): State<AppState>,
    session: CurrentAdmin,
    JsonBody(req): JsonBody<SubMenuRequest>,
) -> ApiResult<Json<SubMenu>> {
    let data = req.into_create()?;
    Ok(Json(
        state.menus.create_submenu(&session.context(), data).await?,
    ))
}

/// PUT /menus/submenus/{id}/for_admin/
pub async fn update_submenu(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
    JsonBody(req): JsonBody<SubMenuUpdateRequest>,
) -> ApiResult<Json<SubMenu>> {
    let data = req.into_update()?;
    Ok(Json(
        state
            .menus
            .update_submenu(&session.context(), id, data)
            .await?,
    ))
}

/// DELETE /menus/submenus/{id}/for_admin/
pub async fn delete_submenu(
    State(state): State<AppState>,
    session: CurrentAdmin,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    state.menus.delete_submenu(&session.context(), id).await?;
    Ok(Json(MessageResponse::new("Submenu deleted")))
}
