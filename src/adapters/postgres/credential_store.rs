//! PostgreSQL implementation of CredentialStore.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows::{column, timestamp};
use crate::domain::foundation::DomainError;
use crate::domain::user::Credential;
use crate::ports::CredentialStore;

#[derive(Clone)]
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find(&self, username: &str) -> Result<Option<Credential>, DomainError> {
        let row = sqlx::query(
            "SELECT username, password_hash, active, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch credential", e))?;

        match row {
            Some(row) => Ok(Some(Credential {
                username: column(&row, "username")?,
                password_hash: column(&row, "password_hash")?,
                active: column(&row, "active")?,
                created_at: timestamp(&row, "created_at")?,
            })),
            None => Ok(None),
        }
    }

    async fn insert(&self, credential: &Credential) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, active, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(&credential.username)
        .bind(&credential.password_hash)
        .bind(credential.active)
        .bind(credential.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert credential", e))?;

        Ok(result.rows_affected() > 0)
    }
}
