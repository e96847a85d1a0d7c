//! Job vacancy entities.

pub mod model;

pub use model::{CreateVacancy, UpdateVacancy, Vacancy};
