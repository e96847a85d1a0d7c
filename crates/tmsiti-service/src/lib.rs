//! # tmsiti-service
//!
//! Business logic for the site's content resources. Each service owns its
//! repository (and, for resources with attachments, a file store) and
//! implements the validate, persist, return cycle for one resource.
//!
//! Mutating operations take a [`RequestContext`] naming the acting admin.

pub mod context;
pub mod legal;
pub mod menu;
pub mod news;
pub mod staff;
pub mod standard;
pub mod upload;
pub mod vacancy;

pub use context::RequestContext;
pub use legal::LegalActService;
pub use menu::MenuService;
pub use news::NewsService;
pub use staff::StaffService;
pub use standard::StandardService;
pub use upload::FileUpload;
pub use vacancy::VacancyService;
