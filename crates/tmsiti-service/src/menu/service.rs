//! Menu service.

use tracing::info;

use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_database::repositories::MenuRepository;
use tmsiti_entity::menu::{
    CreateMenu, CreateSubMenu, Menu, MenuWithSubmenus, SubMenu, UpdateMenu, UpdateSubMenu,
};

use crate::context::RequestContext;

/// Handles menus and their submenus.
#[derive(Debug, Clone)]
pub struct MenuService {
    repo: MenuRepository,
}

impl MenuService {
    /// Creates a new menu service.
    pub fn new(repo: MenuRepository) -> Self {
        Self { repo }
    }

    /// All menus with nested submenus.
    pub async fn tree(&self) -> AppResult<Vec<MenuWithSubmenus>> {
        self.repo.find_tree().await
    }

    /// Gets one menu with its submenus.
    pub async fn get_menu(&self, id: i64) -> AppResult<MenuWithSubmenus> {
        let menu = self
            .repo
            .find_menu(id)
            .await?
            .ok_or_else(|| AppError::not_found("Menu not found"))?;
        let submenus = self.repo.find_submenus(id).await?;
        Ok(MenuWithSubmenus { menu, submenus })
    }

    /// Creates a menu.
    pub async fn create_menu(&self, ctx: &RequestContext, data: CreateMenu) -> AppResult<Menu> {
        let menu = self.repo.create_menu(&data).await?;
        info!(menu_id = menu.id, admin = %ctx.username, "Menu created");
        Ok(menu)
    }

    /// Applies a partial update to a menu.
    pub async fn update_menu(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateMenu,
    ) -> AppResult<Menu> {
        let menu = self
            .repo
            .update_menu(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Menu not found"))?;
        info!(menu_id = id, admin = %ctx.username, "Menu updated");
        Ok(menu)
    }

    /// Deletes a menu together with its submenus.
    pub async fn delete_menu(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.repo.delete_menu(id).await? {
            return Err(AppError::not_found("Menu not found"));
        }
        info!(menu_id = id, admin = %ctx.username, "Menu deleted");
        Ok(())
    }

    /// Gets one submenu.
    pub async fn get_submenu(&self, id: i64) -> AppResult<SubMenu> {
        self.repo
            .find_submenu(id)
            .await?
            .ok_or_else(|| AppError::not_found("Submenu not found"))
    }

    /// Creates a submenu under an existing menu.
    pub async fn create_submenu(
        &self,
        ctx: &RequestContext,
        data: CreateSubMenu,
    ) -> AppResult<SubMenu> {
        let sub = self.repo.create_submenu(&data).await?;
        info!(submenu_id = sub.id, menu_id = sub.menu_id, admin = %ctx.username, "Submenu created");
        Ok(sub)
    }

    /// Applies a partial update to a submenu.
    pub async fn update_submenu(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateSubMenu,
    ) -> AppResult<SubMenu> {
        let sub = self
            .repo
            .update_submenu(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Submenu not found"))?;
        info!(submenu_id = id, admin = %ctx.username, "Submenu updated");
        Ok(sub)
    }

    /// Deletes a submenu.
    pub async fn delete_submenu(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.repo.delete_submenu(id).await? {
            return Err(AppError::not_found("Submenu not found"));
        }
        info!(submenu_id = id, admin = %ctx.username, "Submenu deleted");
        Ok(())
    }
}
