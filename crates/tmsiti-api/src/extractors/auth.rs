//! `CurrentAdmin` extractor: pulls the bearer token from the
//! `Authorization` header and runs it through the session guard.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use tmsiti_auth::AdminSession;
use tmsiti_core::error::AppError;
use tmsiti_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated admin for a protected handler.
///
/// Taking this extractor is what makes a route admin-only. It rejects
/// with 401 before the handler body runs when the header is missing, the
/// token was revoked, or the token fails verification.
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub AdminSession);

impl CurrentAdmin {
    /// Context to hand to mutating service calls.
    pub fn context(&self) -> RequestContext {
        RequestContext::from(&self.0)
    }
}

impl std::ops::Deref for CurrentAdmin {
    type Target = AdminSession;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::unauthenticated("Not authenticated"))?;

        let session = state.guard.authenticate(bearer.token()).await?;
        Ok(Self(session))
    }
}
