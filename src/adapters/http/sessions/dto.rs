//! HTTP DTOs for session endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionStatus;
use crate::domain::session::{Session, SessionTime};

/// Returned from `POST /sessions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedSessionResponse {
    pub session_id: String,
}

/// A stored session as the API shows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub client_id: String,
    /// Name at the time the session was booked.
    pub client_name: String,
    pub date: NaiveDate,
    pub time: SessionTime,
    pub status: SessionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            session_id: session.id.into_inner(),
            client_id: session.client_id.into_inner(),
            client_name: session.client_name,
            date: session.date,
            time: session.time,
            status: session.status,
            notes: session.notes,
            created_at: session.created_at.as_datetime().to_rfc3339(),
            updated_at: session.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Parses the `:date` path segment as an ISO calendar date.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
