//! Pagination types for list endpoints.
//!
//! Two request shapes exist. [`PageRequest`] (page/per_page) produces the
//! full [`PageResponse`] envelope with totals; [`OffsetRequest`]
//! (limit/offset) is the lean mode that returns a bare sequence. Both
//! reject out-of-range values instead of clamping them.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Validated page/per_page parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    page: u64,
    /// Number of items per page.
    per_page: u64,
}

impl PageRequest {
    /// Create a page request, rejecting `page < 1` and `per_page`
    /// outside `1..=100`.
    pub fn new(page: i64, per_page: i64) -> AppResult<Self> {
        if page < 1 {
            return Err(AppError::invalid_argument(format!(
                "page must be at least 1, got {page}"
            )));
        }
        if per_page < 1 || per_page as u64 > MAX_PAGE_SIZE {
            return Err(AppError::invalid_argument(format!(
                "per_page must be between 1 and {MAX_PAGE_SIZE}, got {per_page}"
            )));
        }
        Ok(Self {
            page: page as u64,
            per_page: per_page as u64,
        })
    }

    /// Requested page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Requested page size.
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Validated limit/offset parameters for the lean listing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetRequest {
    limit: u64,
    offset: u64,
}

impl OffsetRequest {
    /// Create an offset request, rejecting `limit` outside `1..=100` and
    /// negative offsets.
    pub fn new(limit: i64, offset: i64) -> AppResult<Self> {
        if limit < 1 || limit as u64 > MAX_PAGE_SIZE {
            return Err(AppError::invalid_argument(format!(
                "limit must be between 1 and {MAX_PAGE_SIZE}, got {limit}"
            )));
        }
        if offset < 0 {
            return Err(AppError::invalid_argument(format!(
                "offset must not be negative, got {offset}"
            )));
        }
        Ok(Self {
            limit: limit as u64,
            offset: offset as u64,
        })
    }

    /// The SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// The SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Default for OffsetRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl From<PageRequest> for OffsetRequest {
    fn from(page: PageRequest) -> Self {
        Self {
            limit: page.limit(),
            offset: page.offset(),
        }
    }
}

/// Paginated response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of matching items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total number of pages, `ceil(total / per_page)`.
    pub total_pages: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            per_page: request.per_page(),
            total_pages: total.div_ceil(request.per_page()),
        }
    }
}
