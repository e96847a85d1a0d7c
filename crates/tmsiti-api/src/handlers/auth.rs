//! Admin authentication handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{LoginForm, RegisterRequest};
use crate::dto::response::{AdminResponse, MessageResponse, TokenResponse};
use crate::error::ApiResult;
use crate::extractors::{CurrentAdmin, FormBody, JsonBody};
use crate::state::AppState;

/// POST /admin-auth/login
pub async fn login(
    State(state): State<AppState>,
    FormBody(form): FormBody<LoginForm>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state
        .issuer
        .authenticate(&form.username, &form.password)
        .await?;
    Ok(Json(token.into()))
}

/// POST /admin-auth/logout
///
/// Adds the presented token to the revocation ledger; every later request
/// carrying it is rejected.
pub async fn logout(
    State(state): State<AppState>,
    session: CurrentAdmin,
) -> ApiResult<Json<MessageResponse>> {
    state
        .ledger
        .revoke(&session.token, session.claims.exp, &session.admin.username)
        .await?;
    Ok(Json(MessageResponse::new("Successfully logged out")))
}

/// POST /admin-auth/register
pub async fn register(
    State(state): State<AppState>,
    session: CurrentAdmin,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<Json<AdminResponse>> {
    let admin = state
        .issuer
        .register(&req.username, &req.password, &session.admin)
        .await?;
    Ok(Json(admin.into()))
}

/// GET /admin-auth/me
pub async fn me(session: CurrentAdmin) -> Json<AdminResponse> {
    Json(session.0.admin.into())
}
