//! `tmsiti serve`: run the HTTP API in the foreground.

use clap::Args;

use tmsiti_core::config::AppConfig;
use tmsiti_core::error::AppError;

use crate::output;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen on this port instead of `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Listen on this address instead of `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Skip the scheduled revocation-ledger sweep
    #[arg(long)]
    pub no_worker: bool,
}

pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    config.server.port = args.port.unwrap_or(config.server.port);
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    config.worker.enabled &= !args.no_worker;

    output::print_kv("Listening on", &config.server.bind_address());
    output::print_kv("Database", &config.database.url);
    output::print_kv(
        "Ledger sweep",
        if config.worker.enabled {
            config.worker.revocation_sweep_cron.as_str()
        } else {
            "disabled"
        },
    );

    tmsiti_api::run_server(config).await
}
