//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod health;
pub mod legal;
pub mod menu;
pub mod news;
pub mod staff;
pub mod standard;
pub mod vacancy;
