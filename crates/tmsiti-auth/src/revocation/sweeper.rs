//! Periodic pruning of the revocation ledger.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use tmsiti_core::error::AppError;

use super::ledger::RevocationLedger;

/// Removes ledger entries for tokens that have expired on their own.
#[derive(Debug, Clone)]
pub struct RevocationSweeper {
    ledger: Arc<RevocationLedger>,
}

impl RevocationSweeper {
    /// Creates a new sweeper.
    pub fn new(ledger: Arc<RevocationLedger>) -> Self {
        Self { ledger }
    }

    /// Runs one sweep and returns the number of rows removed.
    pub async fn run_sweep(&self) -> Result<u64, AppError> {
        match self.ledger.sweep_expired(Utc::now()).await {
            Ok(0) => Ok(0),
            Ok(removed) => {
                info!(removed, "Pruned expired entries from revocation ledger");
                Ok(removed)
            }
            Err(e) => {
                error!(error = %e, "Revocation ledger sweep failed");
                Err(e)
            }
        }
    }
}
