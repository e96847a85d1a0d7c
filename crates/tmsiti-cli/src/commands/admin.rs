//! Admin account management commands.
//!
//! `admin create` is how the first account is bootstrapped; afterwards
//! admins can also be registered over HTTP by another admin.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use tmsiti_auth::{CredentialIssuer, CredentialValidator, PasswordHasher, TokenEncoder};
use tmsiti_core::config::AppConfig;
use tmsiti_core::error::AppError;
use tmsiti_database::repositories::AdminRepository;

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin
    Create {
        /// Username (will prompt if not provided)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// List all admins
    List,
    /// Set a new password for an admin
    ResetPassword {
        /// Username of the admin
        #[arg(short, long)]
        username: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Admin display row for table output
#[derive(Debug, Serialize, Tabled)]
struct AdminRow {
    id: i64,
    username: String,
    created_at: String,
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}

fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(input_error)
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::connect_migrated(config).await?;
    let admins = AdminRepository::new(db.pool().clone());

    match &args.command {
        AdminCommand::Create { username, password } => {
            let username = match username {
                Some(u) => u.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin username")
                    .interact_text()
                    .map_err(input_error)?,
            };
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("Admin password")?,
            };

            let issuer = CredentialIssuer::new(
                admins,
                PasswordHasher::new(),
                Arc::new(TokenEncoder::new(&config.auth)?),
                CredentialValidator::new(&config.auth),
            );
            let admin = issuer.provision(&username, &password).await?;

            output::print_success(&format!(
                "Admin '{}' created (id: {})",
                admin.username, admin.id
            ));
        }
        AdminCommand::List => {
            let rows: Vec<AdminRow> = admins
                .find_all()
                .await?
                .into_iter()
                .map(|a| AdminRow {
                    id: a.id,
                    username: a.username,
                    created_at: a.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        AdminCommand::ResetPassword { username, password } => {
            let admin = admins
                .find_by_username(username)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Admin '{username}' not found")))?;

            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("New password")?,
            };
            CredentialValidator::new(&config.auth).password(&password)?;

            let hashed = PasswordHasher::new().hash(&password)?;
            admins.update_password(admin.id, &hashed).await?;

            output::print_success(&format!("Password reset for admin '{username}'"));
            output::print_warning("Tokens issued before the reset stay valid until they expire.");
        }
    }

    db.close().await;
    Ok(())
}
