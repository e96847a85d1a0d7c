//! Request context carrying the acting admin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tmsiti_auth::AdminSession;

/// Context for the current authenticated request.
///
/// Built from the guard's session and passed into mutating service methods
/// so that every change is attributed to an admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting admin's ID.
    pub admin_id: i64,
    /// The acting admin's username.
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(admin_id: i64, username: impl Into<String>) -> Self {
        Self {
            admin_id,
            username: username.into(),
            request_time: Utc::now(),
        }
    }
}

impl From<&AdminSession> for RequestContext {
    fn from(session: &AdminSession) -> Self {
        Self::new(session.admin.id, session.admin.username.clone())
    }
}
