//! # tmsiti-entity
//!
//! Domain entity models for the TMSITI CMS. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod admin;
pub mod legal;
pub mod menu;
pub mod news;
pub mod revocation;
pub mod staff;
pub mod standard;
pub mod vacancy;
