//! Application builder and server entry point.

use std::sync::Arc;

use axum::Router;
use tracing::{error, info, warn};

use tmsiti_core::config::AppConfig;
use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_database::DatabasePool;
use tmsiti_database::migration::run_migrations;
use tmsiti_worker::{CronScheduler, RevocationSweepJob};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Connects to the database, applies migrations, and serves until a
/// shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting TMSITI CMS server...");

    if config.auth.uses_placeholder_secret() {
        warn!(
            "auth.jwt_secret is the published placeholder; anyone can forge admin tokens. \
             Set TMSITI__AUTH__JWT_SECRET before exposing this server"
        );
    }

    // ── Step 1: Database ─────────────────────────────────────────
    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;

    // ── Step 2: State ────────────────────────────────────────────
    let state = AppState::new(config.clone(), db.clone()).await?;

    // ── Step 3: Scheduled maintenance ────────────────────────────
    let mut scheduler = if config.worker.enabled {
        let scheduler = CronScheduler::new().await?;
        scheduler
            .register(
                &config.worker.revocation_sweep_cron,
                Arc::new(RevocationSweepJob::new(Arc::clone(&state.sweeper))),
            )
            .await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        info!("Scheduled maintenance disabled");
        None
    };

    // ── Step 4: HTTP server ──────────────────────────────────────
    let app = build_app(state);
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "TMSITI CMS server listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")));

    // ── Step 5: Teardown ─────────────────────────────────────────
    if let Some(scheduler) = scheduler.as_mut() {
        if let Err(e) = scheduler.shutdown().await {
            error!(error = %e, "Failed to stop scheduler");
        }
    }
    db.close().await;

    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
