//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Scheduled maintenance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether scheduled maintenance runs inside the server process.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Six-field cron expression for pruning expired revoked tokens.
    #[serde(default = "default_sweep_cron")]
    pub revocation_sweep_cron: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            revocation_sweep_cron: default_sweep_cron(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_sweep_cron() -> String {
    "0 0 * * * *".to_string()
}
