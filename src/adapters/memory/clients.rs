//! In-memory client store.

use async_trait::async_trait;

use super::table::Table;
use crate::domain::client::{Client, ClientUpdate};
use crate::domain::foundation::{
    ClientId, DomainError, ErrorCode, OwnedByTenant, TenantId, Timestamp,
};
use crate::ports::ClientStore;

/// Clients keyed by `(tenant, client_id)`.
pub struct InMemoryClientStore {
    rows: Table<(TenantId, ClientId), Client>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self { rows: Table::new() }
    }
}

impl Default for InMemoryClientStore {
    fn default() -> Self {
        Self::new()
    }
}

fn key(tenant: &TenantId, id: &ClientId) -> (TenantId, ClientId) {
    (tenant.clone(), id.clone())
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn insert(&self, client: &Client) -> Result<(), DomainError> {
        if self.rows.insert(key(&client.tenant, &client.id), client.clone()).await {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("insert client: duplicate id {}", client.id),
            ))
        }
    }

    async fn find(&self, tenant: &TenantId, id: &ClientId) -> Result<Option<Client>, DomainError> {
        Ok(self.rows.get(&key(tenant, id)).await)
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Client>, DomainError> {
        Ok(self.rows.scan(|_, c| c.is_owned_by(tenant)).await)
    }

    async fn update(
        &self,
        tenant: &TenantId,
        id: &ClientId,
        update: &ClientUpdate,
        now: Timestamp,
    ) -> Result<bool, DomainError> {
        Ok(self
            .rows
            .modify(&key(tenant, id), |client| client.apply(update, now))
            .await)
    }

    async fn delete(&self, tenant: &TenantId, id: &ClientId) -> Result<bool, DomainError> {
        Ok(self.rows.remove(&key(tenant, id)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::sample_new_client;

    fn client(tenant: &str, id: &str) -> Client {
        Client::from_new(
            ClientId::new(id).unwrap(),
            TenantId::new(tenant).unwrap(),
            &sample_new_client("Ana"),
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn duplicate_insert_is_database_error() {
        let store = InMemoryClientStore::new();
        store.insert(&client("admin", "c1")).await.unwrap();

        let err = store.insert(&client("admin", "c1")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[tokio::test]
    async fn list_filters_by_tenant_in_insertion_order() {
        let store = InMemoryClientStore::new();
        store.insert(&client("admin", "c2")).await.unwrap();
        store.insert(&client("other", "c9")).await.unwrap();
        store.insert(&client("admin", "c1")).await.unwrap();

        let tenant = TenantId::new("admin").unwrap();
        let ids: Vec<String> = store
            .list(&tenant)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id.into_inner())
            .collect();

        assert_eq!(ids, vec!["c2", "c1"]);
    }
}
