//! In-memory credential store.

use async_trait::async_trait;

use super::table::Table;
use crate::domain::foundation::DomainError;
use crate::domain::user::Credential;
use crate::ports::CredentialStore;

/// Credentials keyed by username.
pub struct InMemoryCredentialStore {
    rows: Table<String, Credential>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self { rows: Table::new() }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find(&self, username: &str) -> Result<Option<Credential>, DomainError> {
        Ok(self.rows.get(&username.to_string()).await)
    }

    async fn insert(&self, credential: &Credential) -> Result<bool, DomainError> {
        Ok(self
            .rows
            .insert(credential.username.clone(), credential.clone())
            .await)
    }
}
