//! TMSITI CMS server.
//!
//! Loads configuration, initializes logging, and hands over to the API
//! crate, which owns the database pool, scheduler, and HTTP listener.

use tracing_subscriber::{EnvFilter, fmt};

use tmsiti_core::config::{AppConfig, LogFormat};
use tmsiti_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "TMSITI CMS");

    if let Err(e) = tmsiti_api::run_server(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `TMSITI_ENV` overlay, and `TMSITI__*`
/// environment variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let base =
        std::env::var("TMSITI_CONFIG").unwrap_or_else(|_| "config/default".to_string());
    let env = std::env::var("TMSITI_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&base, &env)
}

/// Initialize tracing. `RUST_LOG` wins over `logging.level`.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
