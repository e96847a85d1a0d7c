//! Request DTOs with validation.
//!
//! Text fields are trimmed before validation; the trimmed value is what
//! gets stored.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use tmsiti_core::error::AppError;
use tmsiti_core::result::AppResult;
use tmsiti_entity::legal::{CreateLegalAct, LegalActKind, UpdateLegalAct};
use tmsiti_entity::menu::{CreateMenu, CreateSubMenu, UpdateMenu, UpdateSubMenu};
use tmsiti_entity::vacancy::{CreateVacancy, UpdateVacancy};

/// Runs the derived validation rules and maps failures to a 422.
pub fn validated<T: Validate>(value: T) -> AppResult<T> {
    value
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(value)
}

fn trim(value: String) -> String {
    value.trim().to_string()
}

fn trim_opt(value: Option<String>) -> Option<String> {
    value.map(trim)
}

/// Form-encoded login body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// JSON body for registering another admin.
///
/// Length rules live in the credential validator so the command line
/// applies the same ones.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// New admin's username.
    pub username: String,
    /// New admin's password.
    pub password: String,
}

fn default_true() -> bool {
    true
}

/// Form body for creating a vacancy.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VacancyForm {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[validate(length(min = 3, message = "Department must be at least 3 characters"))]
    pub department: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl VacancyForm {
    /// Trims and validates the form.
    pub fn into_create(self) -> AppResult<CreateVacancy> {
        let form = validated(Self {
            title: trim(self.title),
            description: trim(self.description),
            department: trim(self.department),
            is_active: self.is_active,
        })?;
        Ok(CreateVacancy {
            title: form.title,
            description: form.description,
            department: form.department,
            is_active: form.is_active,
        })
    }
}

/// Form body for updating a vacancy. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VacancyUpdateForm {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 3, message = "Department must be at least 3 characters"))]
    pub department: Option<String>,
    pub is_active: Option<bool>,
}

impl VacancyUpdateForm {
    /// Trims and validates the form.
    pub fn into_update(self) -> AppResult<UpdateVacancy> {
        let form = validated(Self {
            title: trim_opt(self.title),
            description: trim_opt(self.description),
            department: trim_opt(self.department),
            is_active: self.is_active,
        })?;
        Ok(UpdateVacancy {
            title: form.title,
            description: form.description,
            department: form.department,
            is_active: form.is_active,
        })
    }
}

/// Form body for creating a legal act.
///
/// `type` is kept as text so an unknown kind is reported as a 422 with
/// the allowed values rather than a generic parse failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LegalActForm {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[validate(length(min = 10, message = "Content must be at least 10 characters"))]
    pub content: String,
    #[validate(length(min = 3, message = "Number must be at least 3 characters"))]
    pub number: String,
    pub date: NaiveDate,
    #[validate(length(min = 3, message = "Source must be at least 3 characters"))]
    pub source: String,
}

impl LegalActForm {
    /// Trims and validates the form.
    pub fn into_create(self) -> AppResult<CreateLegalAct> {
        let form = validated(Self {
            title: trim(self.title),
            kind: self.kind,
            content: trim(self.content),
            number: trim(self.number),
            date: self.date,
            source: trim(self.source),
        })?;
        Ok(CreateLegalAct {
            kind: form.kind.parse::<LegalActKind>()?,
            title: form.title,
            content: form.content,
            number: form.number,
            date: form.date,
            source: form.source,
        })
    }
}

/// Form body for updating a legal act. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LegalActUpdateForm {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[validate(length(min = 10, message = "Content must be at least 10 characters"))]
    pub content: Option<String>,
    #[validate(length(min = 3, message = "Number must be at least 3 characters"))]
    pub number: Option<String>,
    pub date: Option<NaiveDate>,
    #[validate(length(min = 3, message = "Source must be at least 3 characters"))]
    pub source: Option<String>,
}

impl LegalActUpdateForm {
    /// Trims and validates the form.
    pub fn into_update(self) -> AppResult<UpdateLegalAct> {
        let form = validated(Self {
            title: trim_opt(self.title),
            kind: self.kind,
            content: trim_opt(self.content),
            number: trim_opt(self.number),
            date: self.date,
            source: trim_opt(self.source),
        })?;
        Ok(UpdateLegalAct {
            kind: form
                .kind
                .as_deref()
                .map(str::parse::<LegalActKind>)
                .transpose()?,
            title: form.title,
            content: form.content,
            number: form.number,
            date: form.date,
            source: form.source,
        })
    }
}

/// JSON body for creating a menu.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MenuRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub url: Option<String>,
}

impl MenuRequest {
    /// Trims and validates the body.
    pub fn into_create(self) -> AppResult<CreateMenu> {
        let body = validated(Self {
            title: trim(self.title),
            url: self.url,
        })?;
        Ok(CreateMenu {
            title: body.title,
            url: body.url,
        })
    }
}

/// JSON body for updating a menu.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MenuUpdateRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub url: Option<String>,
}

impl MenuUpdateRequest {
    /// Trims and validates the body.
    pub fn into_update(self) -> AppResult<UpdateMenu> {
        let body = validated(Self {
            title: trim_opt(self.title),
            url: self.url,
        })?;
        Ok(UpdateMenu {
            title: body.title,
            url: body.url,
        })
    }
}

/// JSON body for creating a submenu.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubMenuRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub url: Option<String>,
    pub menu_id: i64,
}

impl SubMenuRequest {
    /// Trims and validates the body.
    pub fn into_create(self) -> AppResult<CreateSubMenu> {
        let body = validated(Self {
            title: trim(self.title),
            url: self.url,
            menu_id: self.menu_id,
        })?;
        Ok(CreateSubMenu {
            title: body.title,
            url: body.url,
            menu_id: body.menu_id,
        })
    }
}

/// JSON body for updating a submenu.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubMenuUpdateRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub url: Option<String>,
    pub menu_id: Option<i64>,
}

impl SubMenuUpdateRequest {
    /// Trims and validates the body.
    pub fn into_update(self) -> AppResult<UpdateSubMenu> {
        let body = validated(Self {
            title: trim_opt(self.title),
            url: self.url,
            menu_id: self.menu_id,
        })?;
        Ok(UpdateSubMenu {
            title: body.title,
            url: body.url,
            menu_id: body.menu_id,
        })
    }
}
