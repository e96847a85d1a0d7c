//! Legal act entities (laws, resolutions, decrees).

pub mod kind;
pub mod model;

pub use kind::LegalActKind;
pub use model::{CreateLegalAct, LegalAct, UpdateLegalAct};
