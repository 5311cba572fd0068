//! In-memory session store.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::table::Table;
use crate::domain::foundation::{
    DomainError, ErrorCode, OwnedByTenant, SessionId, TenantId, Timestamp,
};
use crate::domain::session::{Session, SessionUpdate};
use crate::ports::SessionStore;

/// Sessions keyed by `(tenant, session_id)`.
pub struct InMemorySessionStore {
    rows: Table<(TenantId, SessionId), Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self { rows: Table::new() }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn key(tenant: &TenantId, id: &SessionId) -> (TenantId, SessionId) {
    (tenant.clone(), id.clone())
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: &Session) -> Result<(), DomainError> {
        if self.rows.insert(key(&session.tenant, &session.id), session.clone()).await {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("insert session: duplicate id {}", session.id),
            ))
        }
    }

    async fn find(&self, tenant: &TenantId, id: &SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.rows.get(&key(tenant, id)).await)
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Session>, DomainError> {
        Ok(self.rows.scan(|_, s| s.is_owned_by(tenant)).await)
    }

    async fn list_on_date(
        &self,
        tenant: &TenantId,
        date: NaiveDate,
    ) -> Result<Vec<Session>, DomainError> {
        Ok(self
            .rows
            .scan(|_, s| s.is_owned_by(tenant) && s.date == date)
            .await)
    }

    async fn update(
        &self,
        tenant: &TenantId,
        id: &SessionId,
        update: &SessionUpdate,
        now: Timestamp,
    ) -> Result<bool, DomainError> {
        Ok(self
            .rows
            .modify(&key(tenant, id), |session| session.apply(update, now))
            .await)
    }

    async fn delete(&self, tenant: &TenantId, id: &SessionId) -> Result<bool, DomainError> {
        Ok(self.rows.remove(&key(tenant, id)).await)
    }
}
