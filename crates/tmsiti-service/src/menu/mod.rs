//! Navigation menus and submenus.

pub mod service;

pub use service::MenuService;
