//! Typed path parameter extractor.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use tmsiti_core::error::AppError;

use crate::error::ApiError;

/// The numeric `{id}` segment of a resource route.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid_argument(e.body_text()))?;
        let id = raw
            .parse::<i64>()
            .map_err(|_| AppError::invalid_argument(format!("Invalid id: {raw}")))?;
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    use super::*;

    async fn status_of(uri: &str) -> StatusCode {
        Router::new()
            .route("/items/{id}", get(|PathId(id): PathId| async move { id.to_string() }))
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_numeric_id() {
        assert_eq!(status_of("/items/42").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_numeric_id() {
        assert_eq!(status_of("/items/forty-two").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("/items/1.5").await, StatusCode::BAD_REQUEST);
    }
}
