//! Menu listing with nested submenus.

use serde::{Deserialize, Serialize};

use super::model::{Menu, SubMenu};

/// A menu together with its submenus, as returned by the public listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuWithSubmenus {
    /// The menu row.
    #[serde(flatten)]
    pub menu: Menu,
    /// Child entries ordered by id.
    pub submenus: Vec<SubMenu>,
}

impl MenuWithSubmenus {
    /// Group submenus under their parent menus, preserving menu order.
    pub fn assemble(menus: Vec<Menu>, submenus: Vec<SubMenu>) -> Vec<Self> {
        let mut out: Vec<Self> = menus
            .into_iter()
            .map(|menu| Self {
                menu,
                submenus: Vec::new(),
            })
            .collect();
        for sub in submenus {
            if let Some(parent) = out.iter_mut().find(|m| m.menu.id == sub.menu_id) {
                parent.submenus.push(sub);
            }
        }
        out
    }
}
