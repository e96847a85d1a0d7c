//! Pagination query parameter extractors.
//!
//! Absent parameters take their defaults; present but out-of-range values
//! are rejected with 400 rather than clamped.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::Deserialize;

use tmsiti_core::types::pagination::{DEFAULT_PAGE_SIZE, OffsetRequest, PageRequest};

use super::body::QueryParams;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct PageParams {
    page: Option<i64>,
    per_page: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OffsetParams {
    limit: Option<i64>,
    offset: Option<i64>,
}

/// `?page=&per_page=` for endpoints that return the full envelope.
#[derive(Debug, Clone, Copy)]
pub struct Page(pub PageRequest);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let QueryParams(params) = QueryParams::<PageParams>::from_request_parts(parts, state).await?;
        let request = PageRequest::new(
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(DEFAULT_PAGE_SIZE as i64),
        )?;
        Ok(Self(request))
    }
}

/// `?limit=&offset=` for endpoints that return a bare list.
#[derive(Debug, Clone, Copy)]
pub struct Offset(pub OffsetRequest);

impl<S> FromRequestParts<S> for Offset
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let QueryParams(params) =
            QueryParams::<OffsetParams>::from_request_parts(parts, state).await?;
        let request = OffsetRequest::new(
            params.limit.unwrap_or(DEFAULT_PAGE_SIZE as i64),
            params.offset.unwrap_or(0),
        )?;
        Ok(Self(request))
    }
}
