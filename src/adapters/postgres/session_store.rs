//! PostgreSQL implementation of SessionStore.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Timelike};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, parse, timestamp};
use crate::domain::foundation::{
    ClientId, DomainError, SessionId, SessionStatus, TenantId, Timestamp,
};
use crate::domain::session::{Session, SessionTime, SessionUpdate};
use crate::ports::SessionStore;

const SELECT_COLUMNS: &str = r#"
    SELECT id, tenant, client_id, client_name, date, time, status, notes,
           created_at, updated_at
    FROM sessions
"#;

/// Session rows addressed by primary key `id` plus a tenant filter.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn insert(&self, session: &Session) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, tenant, client_id, client_name, date, time, status, notes,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(session.id.as_str())
        .bind(session.tenant.as_str())
        .bind(session.client_id.as_str())
        .bind(&session.client_name)
        .bind(session.date)
        .bind(session.time.as_naive())
        .bind(session.status.as_str())
        .bind(session.notes.as_deref())
        .bind(session.created_at.as_datetime())
        .bind(session.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert session", e))?;

        Ok(())
    }

    async fn find(&self, tenant: &TenantId, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1 AND tenant = $2", SELECT_COLUMNS))
            .bind(id.as_str())
            .bind(tenant.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch session", e))?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!("{} WHERE tenant = $1 ORDER BY seq", SELECT_COLUMNS))
            .bind(tenant.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list sessions", e))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn list_on_date(
        &self,
        tenant: &TenantId,
        date: NaiveDate,
    ) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE tenant = $1 AND date = $2 ORDER BY seq",
            SELECT_COLUMNS
        ))
        .bind(tenant.as_str())
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list sessions by date", e))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn update(
        &self,
        tenant: &TenantId,
        id: &SessionId,
        update: &SessionUpdate,
        now: Timestamp,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE sessions SET
                time = COALESCE($3, time),
                status = COALESCE($4, status),
                notes = COALESCE($5, notes),
                updated_at = $6
            WHERE id = $1 AND tenant = $2
            "#,
        )
        .bind(id.as_str())
        .bind(tenant.as_str())
        .bind(update.time.map(|t| t.as_naive()))
        .bind(update.status.map(|s| s.as_str()))
        .bind(update.notes.as_deref())
        .bind(now.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update session", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, tenant: &TenantId, id: &SessionId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1 AND tenant = $2")
            .bind(id.as_str())
            .bind(tenant.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete session", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_session(row: &PgRow) -> Result<Session, DomainError> {
    let id: String = column(row, "id")?;
    let tenant: String = column(row, "tenant")?;
    let client_id: String = column(row, "client_id")?;
    let time: NaiveTime = column(row, "time")?;
    let status: String = column(row, "status")?;

    Ok(Session {
        id: parse("id", &id, |s| SessionId::new(s))?,
        tenant: parse("tenant", &tenant, |s| TenantId::new(s))?,
        client_id: parse("client_id", &client_id, |s| ClientId::new(s))?,
        client_name: column(row, "client_name")?,
        date: column(row, "date")?,
        time: SessionTime::from_hm(time.hour(), time.minute())
            .map_err(|e| DomainError::database("Invalid time", e))?,
        status: parse("status", &status, |s| s.parse::<SessionStatus>())?,
        notes: column(row, "notes")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}
