//! Repository implementations for all TMSITI entities.

pub mod admin;
pub mod legal_act;
pub mod menu;
pub mod news;
pub mod revoked_token;
pub mod staff;
pub mod standard;
pub mod vacancy;

pub use admin::AdminRepository;
pub use legal_act::LegalActRepository;
pub use menu::MenuRepository;
pub use news::NewsRepository;
pub use revoked_token::RevokedTokenRepository;
pub use staff::StaffRepository;
pub use standard::StandardRepository;
pub use vacancy::VacancyRepository;

/// Whether a sqlx error is a UNIQUE constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

/// Whether a sqlx error is a FOREIGN KEY constraint violation.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_foreign_key_violation(),
        _ => false,
    }
}
