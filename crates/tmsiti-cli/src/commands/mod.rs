//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod serve;
pub mod tokens;

use clap::{Parser, Subcommand};

use tmsiti_core::config::AppConfig;
use tmsiti_core::error::AppError;
use tmsiti_database::DatabasePool;

use crate::output::OutputFormat;

/// TMSITI CMS administration
#[derive(Debug, Parser)]
#[command(name = "tmsiti", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file, without extension
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/{env}.toml`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin account management
    Admin(admin::AdminArgs),
    /// Revoked token maintenance
    Tokens(tokens::TokensArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config, self.format).await,
            Commands::Admin(args) => admin::execute(args, &config, self.format).await,
            Commands::Tokens(args) => tokens::execute(args, &config).await,
        }
    }
}

/// Helper: connect to the configured database and bring the schema up to
/// date.
pub async fn connect_migrated(config: &AppConfig) -> Result<DatabasePool, AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    tmsiti_database::migration::run_migrations(db.pool()).await?;
    Ok(db)
}
