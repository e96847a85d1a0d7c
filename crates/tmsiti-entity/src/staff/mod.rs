//! Leadership and staff directory entries.

pub mod model;

pub use model::{StaffMember, StaffProfile, UpdateStaffProfile};
