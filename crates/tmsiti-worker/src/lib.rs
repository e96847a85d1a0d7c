//! Scheduled maintenance for the TMSITI CMS.
//!
//! This crate provides:
//! - A cron scheduler that runs registered jobs on their schedules
//! - The revocation ledger sweep job

pub mod jobs;
pub mod scheduler;

pub use jobs::{RevocationSweepJob, ScheduledJob};
pub use scheduler::CronScheduler;
