//! Scheduled coaching session entity.
//!
//! # Denormalized client name
//!
//! `client_name` is copied from the client when the session is created and
//! is never refreshed. Renaming or deleting the client leaves existing
//! sessions showing the old name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SessionTime;
use crate::domain::foundation::{
    ClientId, OwnedByTenant, SessionId, SessionStatus, TenantId, Timestamp,
};

/// Stored coaching session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub tenant: TenantId,
    pub client_id: ClientId,
    pub client_name: String,
    pub date: NaiveDate,
    pub time: SessionTime,
    pub status: SessionStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Session {
    /// Builds a scheduled session from a creation payload.
    pub fn schedule(
        id: SessionId,
        tenant: TenantId,
        new: &NewSession,
        client_name: String,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant,
            client_id: new.client_id.clone(),
            client_name,
            date: new.date,
            time: new.time,
            status: SessionStatus::Scheduled,
            notes: new.notes.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the supplied fields of `update` and stamps `updated_at`.
    pub fn apply(&mut self, update: &SessionUpdate, now: Timestamp) {
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(notes) = &update.notes {
            self.notes = Some(notes.clone());
        }
        self.updated_at = now;
    }
}

impl OwnedByTenant for Session {
    fn tenant(&self) -> &TenantId {
        &self.tenant
    }
}

/// Payload for scheduling a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSession {
    pub client_id: ClientId,
    pub date: NaiveDate,
    pub time: SessionTime,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for a session. Time, status and notes change independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUpdate {
    #[serde(default)]
    pub time: Option<SessionTime>,
    #[serde(default)]
    pub status: Option<SessionStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Sorts sessions by time of day. Equal times keep their input order.
///
/// Callers pass sessions in insertion order.
pub fn sort_by_time(sessions: &mut [Session]) {
    sessions.sort_by_key(|s| s.time);
}
