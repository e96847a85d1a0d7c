//! Site navigation entities.

pub mod model;
pub mod tree;

pub use model::{CreateMenu, CreateSubMenu, Menu, SubMenu, UpdateMenu, UpdateSubMenu};
pub use tree::MenuWithSubmenus;
