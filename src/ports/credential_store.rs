//! Credential storage port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::user::Credential;

/// Backend storage for login credentials, keyed by username.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find(&self, username: &str) -> Result<Option<Credential>, DomainError>;

    /// Store a new credential. Returns `false` if the username is taken.
    async fn insert(&self, credential: &Credential) -> Result<bool, DomainError>;
}
