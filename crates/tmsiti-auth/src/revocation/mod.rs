//! Revoked-token ledger and its maintenance.

pub mod ledger;
pub mod sweeper;

pub use ledger::{RevocationLedger, RevokeOutcome, token_digest};
pub use sweeper::RevocationSweeper;
