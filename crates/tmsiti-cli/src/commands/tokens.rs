//! Revocation ledger maintenance commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use tmsiti_auth::{RevocationLedger, RevocationSweeper};
use tmsiti_core::config::AppConfig;
use tmsiti_core::error::AppError;
use tmsiti_database::repositories::RevokedTokenRepository;

use crate::output;

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokensArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokensCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokensCommand {
    /// Delete ledger entries for tokens that have already expired
    Sweep,
    /// Show how many tokens are currently revoked
    Count,
}

/// Execute token commands
pub async fn execute(args: &TokensArgs, config: &AppConfig) -> Result<(), AppError> {
    let db = super::connect_migrated(config).await?;
    let ledger = Arc::new(RevocationLedger::new(RevokedTokenRepository::new(
        db.pool().clone(),
    )));

    match &args.command {
        TokensCommand::Sweep => {
            let removed = RevocationSweeper::new(Arc::clone(&ledger)).run_sweep().await?;
            output::print_success(&format!("Removed {removed} expired ledger entries"));
        }
        TokensCommand::Count => {
            let count = ledger.count().await?;
            output::print_kv("Revoked tokens", &count.to_string());
        }
    }

    db.close().await;
    Ok(())
}
