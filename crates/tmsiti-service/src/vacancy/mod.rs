//! Job vacancies.

pub mod service;

pub use service::VacancyService;
