//! Built-in scheduled jobs.

pub mod revocation;

pub use revocation::RevocationSweepJob;

use async_trait::async_trait;

use tmsiti_core::result::AppResult;

/// A unit of periodic work.
#[async_trait]
pub trait ScheduledJob: Send + Sync + std::fmt::Debug + 'static {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Execute one run of the job.
    async fn run(&self) -> AppResult<()>;
}
