//! PostgreSQL adapters - relational implementations of the storage ports.
//!
//! Every tenant-scoped table is addressed by primary key `id` with an index
//! on `tenant`; `week_plans` is unique on `(tenant, client_id, week_start)`.
//! Listing order follows the `seq` column assigned at insert.

mod client_store;
mod credential_store;
mod plan_store;
mod rows;
mod session_store;

pub use client_store::PostgresClientStore;
pub use credential_store::PostgresCredentialStore;
pub use plan_store::PostgresPlanStore;
pub use session_store::PostgresSessionStore;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::StorageConfig;
use crate::domain::foundation::DomainError;

/// Opens a connection pool sized by the storage configuration.
pub async fn connect(config: &StorageConfig) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database("Failed to run migrations", e))
}
