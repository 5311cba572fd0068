//! Client storage port.
//!
//! Narrow backend contract for client rows. Business rules live in
//! `application::ClientRepository`; a store only reads and writes.

use async_trait::async_trait;

use crate::domain::client::{Client, ClientUpdate};
use crate::domain::foundation::{ClientId, DomainError, TenantId, Timestamp};

/// Backend storage for client profiles, addressed by `(tenant, id)`.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Insert a fully-built record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure or id collision
    async fn insert(&self, client: &Client) -> Result<(), DomainError>;

    /// Find a client by id within a tenant.
    async fn find(&self, tenant: &TenantId, id: &ClientId) -> Result<Option<Client>, DomainError>;

    /// All clients of a tenant in insertion order.
    async fn list(&self, tenant: &TenantId) -> Result<Vec<Client>, DomainError>;

    /// Apply supplied fields and set `updated_at = now`.
    ///
    /// Returns `false` if no record matched.
    async fn update(
        &self,
        tenant: &TenantId,
        id: &ClientId,
        update: &ClientUpdate,
        now: Timestamp,
    ) -> Result<bool, DomainError>;

    /// Returns `false` if no record matched.
    async fn delete(&self, tenant: &TenantId, id: &ClientId) -> Result<bool, DomainError>;
}
