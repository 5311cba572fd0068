//! ClientRepository - tenant-scoped CRUD for client profiles.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::client::{Client, ClientUpdate, NewClient};
use crate::domain::foundation::{ClientId, DomainError, TenantId};
use crate::ports::{ClientStore, Clock, TenantRepository};

/// Client repository over any `ClientStore` backend.
///
/// `bmr`, `tdee` and `calorie_maintenance` are stored exactly as supplied.
pub struct ClientRepository {
    store: Arc<dyn ClientStore>,
    clock: Arc<dyn Clock>,
}

impl ClientRepository {
    pub fn new(store: Arc<dyn ClientStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl TenantRepository for ClientRepository {
    type Entity = Client;
    type Id = ClientId;
    type Create = NewClient;
    type Update = ClientUpdate;

    async fn create(&self, tenant: &TenantId, payload: &NewClient) -> Result<ClientId, DomainError> {
        payload.validate()?;

        let id = ClientId::generate();
        let client = Client::from_new(id.clone(), tenant.clone(), payload, self.clock.now());
        self.store.insert(&client).await?;

        debug!(tenant = %tenant, client_id = %id, "client created");
        Ok(id)
    }

    async fn get(&self, id: &ClientId, tenant: &TenantId) -> Result<Option<Client>, DomainError> {
        self.store.find(tenant, id).await
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Client>, DomainError> {
        self.store.list(tenant).await
    }

    async fn update(
        &self,
        id: &ClientId,
        tenant: &TenantId,
        partial: &ClientUpdate,
    ) -> Result<bool, DomainError> {
        partial.validate()?;

        let updated = self
            .store
            .update(tenant, id, partial, self.clock.now())
            .await?;
        debug!(tenant = %tenant, client_id = %id, updated, "client update");
        Ok(updated)
    }

    async fn delete(&self, id: &ClientId, tenant: &TenantId) -> Result<bool, DomainError> {
        let deleted = self.store.delete(tenant, id).await?;
        debug!(tenant = %tenant, client_id = %id, deleted, "client delete");
        Ok(deleted)
    }
}
