//! Persistence port - the tenant-scoped CRUD contract.
//!
//! Every entity the service stores (clients, sessions) is reached through
//! this one contract, independent of the storage backend behind it.
//!
//! # Contract
//!
//! - `create` assigns a fresh globally-unique id, stamps `created_at` and
//!   `updated_at`, and never mutates the payload
//! - `get` returns `None` for a record owned by another tenant
//! - `list` returns insertion order unless the entity has a domain order
//! - `update` applies only the supplied fields, stamps `updated_at`, and
//!   returns `false` when no record matches
//! - `delete` returns `false` when the record did not exist
//!
//! Not-found is never an error. `Err` is reserved for validation and
//! backend failures.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TenantId};

/// Tenant-scoped repository for one entity type.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Stored record type.
    type Entity: Send + Sync;
    /// Identifier type.
    type Id: Send + Sync;
    /// Creation payload.
    type Create: Send + Sync;
    /// Partial update payload.
    type Update: Send + Sync;

    /// Persist a new record and return its id.
    ///
    /// # Errors
    ///
    /// - Validation errors if the payload is rejected
    /// - `DatabaseError` on persistence failure
    async fn create(&self, tenant: &TenantId, payload: &Self::Create)
        -> Result<Self::Id, DomainError>;

    /// Fetch a record owned by `tenant`.
    async fn get(&self, id: &Self::Id, tenant: &TenantId)
        -> Result<Option<Self::Entity>, DomainError>;

    /// All records owned by `tenant`.
    async fn list(&self, tenant: &TenantId) -> Result<Vec<Self::Entity>, DomainError>;

    /// Apply a partial update. Returns `false` if no record matched.
    async fn update(
        &self,
        id: &Self::Id,
        tenant: &TenantId,
        partial: &Self::Update,
    ) -> Result<bool, DomainError>;

    /// Remove a record. Returns `false` if it did not exist.
    async fn delete(&self, id: &Self::Id, tenant: &TenantId) -> Result<bool, DomainError>;
}
