//! Pruning of expired revocation ledger entries.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use tmsiti_auth::revocation::RevocationSweeper;
use tmsiti_core::result::AppResult;

use super::ScheduledJob;

/// Runs the revocation ledger sweep.
#[derive(Debug, Clone)]
pub struct RevocationSweepJob {
    sweeper: Arc<RevocationSweeper>,
}

impl RevocationSweepJob {
    /// Create a new sweep job.
    pub fn new(sweeper: Arc<RevocationSweeper>) -> Self {
        Self { sweeper }
    }
}

#[async_trait]
impl ScheduledJob for RevocationSweepJob {
    fn name(&self) -> &'static str {
        "revocation_sweep"
    }

    async fn run(&self) -> AppResult<()> {
        let removed = self.sweeper.run_sweep().await?;
        debug!(removed, "Revocation sweep finished");
        Ok(())
    }
}
