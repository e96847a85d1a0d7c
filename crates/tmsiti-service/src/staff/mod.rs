//! Leadership directory with optional portraits.

pub mod service;

pub use service::StaffService;
