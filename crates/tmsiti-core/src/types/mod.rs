//! Request-independent query types: filters, ordering, and pagination.

pub mod filter;
pub mod pagination;
pub mod sorting;

pub use filter::{FilterField, FilterValue, Predicate};
pub use pagination::{OffsetRequest, PageRequest, PageResponse};
pub use sorting::{SortDirection, SortField};
