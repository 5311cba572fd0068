//! Session storage port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, SessionId, TenantId, Timestamp};
use crate::domain::session::{Session, SessionUpdate};

/// Backend storage for coaching sessions, addressed by `(tenant, id)`.
///
/// List methods return insertion order. Time ordering is applied by the
/// repository so every backend breaks ties the same way.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: &Session) -> Result<(), DomainError>;

    async fn find(&self, tenant: &TenantId, id: &SessionId)
        -> Result<Option<Session>, DomainError>;

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Session>, DomainError>;

    /// Sessions of a tenant on exactly `date`, in insertion order.
    async fn list_on_date(
        &self,
        tenant: &TenantId,
        date: NaiveDate,
    ) -> Result<Vec<Session>, DomainError>;

    /// Apply supplied fields and set `updated_at = now`.
    async fn update(
        &self,
        tenant: &TenantId,
        id: &SessionId,
        update: &SessionUpdate,
        now: Timestamp,
    ) -> Result<bool, DomainError>;

    async fn delete(&self, tenant: &TenantId, id: &SessionId) -> Result<bool, DomainError>;
}
