//! Revoked token ledger entities.

pub mod token;

pub use token::NewRevokedToken;
