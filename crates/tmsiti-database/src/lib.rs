//! # tmsiti-database
//!
//! SQLite connection management, embedded migrations, the generic list
//! paginator, and concrete repositories for all TMSITI entities.

pub mod connection;
pub mod migration;
pub mod paginate;
pub mod repositories;

pub use connection::DatabasePool;
pub use paginate::{ListQuery, fetch_window, paginate};
pub use sqlx::SqlitePool;
