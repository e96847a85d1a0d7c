//! Health check handler.

use axum::Json;
use axum::extract::State;

use tmsiti_core::traits::StorageProvider;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = state.db.health_check().await.unwrap_or(false);
    let storage = state.storage.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: if database && storage { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database { "connected" } else { "unavailable" }.to_string(),
        storage: if storage { "available" } else { "unavailable" }.to_string(),
    })
}
