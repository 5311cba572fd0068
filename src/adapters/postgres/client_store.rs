//! PostgreSQL implementation of ClientStore.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{column, parse, timestamp};
use crate::domain::client::{ActivityLevel, Client, ClientUpdate, Sex};
use crate::domain::foundation::{ClientId, DomainError, TenantId, Timestamp};
use crate::ports::ClientStore;

const SELECT_COLUMNS: &str = r#"
    SELECT id, tenant, name, age, sex, height_cm, weight_kg, activity_level, goals,
           bmr, tdee, calorie_maintenance, notes, created_at, updated_at
    FROM clients
"#;

/// Client rows addressed by primary key `id` plus a tenant filter.
#[derive(Clone)]
pub struct PostgresClientStore {
    pool: PgPool,
}

impl PostgresClientStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientStore for PostgresClientStore {
    async fn insert(&self, client: &Client) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO clients (
                id, tenant, name, age, sex, height_cm, weight_kg, activity_level, goals,
                bmr, tdee, calorie_maintenance, notes, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(client.id.as_str())
        .bind(client.tenant.as_str())
        .bind(&client.name)
        .bind(client.age as i32)
        .bind(client.sex.as_str())
        .bind(client.height_cm)
        .bind(client.weight_kg)
        .bind(client.activity_level.as_str())
        .bind(&client.goals)
        .bind(client.bmr)
        .bind(client.tdee)
        .bind(client.calorie_maintenance)
        .bind(&client.notes)
        .bind(client.created_at.as_datetime())
        .bind(client.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert client", e))?;

        Ok(())
    }

    async fn find(&self, tenant: &TenantId, id: &ClientId) -> Result<Option<Client>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1 AND tenant = $2", SELECT_COLUMNS))
            .bind(id.as_str())
            .bind(tenant.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch client", e))?;

        row.as_ref().map(row_to_client).transpose()
    }

    async fn list(&self, tenant: &TenantId) -> Result<Vec<Client>, DomainError> {
        let rows = sqlx::query(&format!("{} WHERE tenant = $1 ORDER BY seq", SELECT_COLUMNS))
            .bind(tenant.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list clients", e))?;

        rows.iter().map(row_to_client).collect()
    }

    async fn update(
        &self,
        tenant: &TenantId,
        id: &ClientId,
        update: &ClientUpdate,
        now: Timestamp,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE clients SET
                name = COALESCE($3, name),
                age = COALESCE($4, age),
                sex = COALESCE($5, sex),
                height_cm = COALESCE($6, height_cm),
                weight_kg = COALESCE($7, weight_kg),
                activity_level = COALESCE($8, activity_level),
                goals = COALESCE($9, goals),
                bmr = COALESCE($10, bmr),
                tdee = COALESCE($11, tdee),
                calorie_maintenance = COALESCE($12, calorie_maintenance),
                notes = COALESCE($13, notes),
                updated_at = $14
            WHERE id = $1 AND tenant = $2
            "#,
        )
        .bind(id.as_str())
        .bind(tenant.as_str())
        .bind(update.name.as_deref())
        .bind(update.age.map(|a| a as i32))
        .bind(update.sex.map(|s| s.as_str()))
        .bind(update.height_cm)
        .bind(update.weight_kg)
        .bind(update.activity_level.map(|l| l.as_str()))
        .bind(update.goals.as_deref())
        .bind(update.bmr)
        .bind(update.tdee)
        .bind(update.calorie_maintenance)
        .bind(update.notes.as_deref())
        .bind(now.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update client", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, tenant: &TenantId, id: &ClientId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1 AND tenant = $2")
            .bind(id.as_str())
            .bind(tenant.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete client", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_client(row: &PgRow) -> Result<Client, DomainError> {
    let id: String = column(row, "id")?;
    let tenant: String = column(row, "tenant")?;
    let age: i32 = column(row, "age")?;
    let sex: String = column(row, "sex")?;
    let activity_level: String = column(row, "activity_level")?;

    Ok(Client {
        id: parse("id", &id, |s| ClientId::new(s))?,
        tenant: parse("tenant", &tenant, |s| TenantId::new(s))?,
        name: column(row, "name")?,
        age: u32::try_from(age).map_err(|e| DomainError::database("Invalid age", e))?,
        sex: parse("sex", &sex, |s| s.parse::<Sex>())?,
        height_cm: column(row, "height_cm")?,
        weight_kg: column(row, "weight_kg")?,
        activity_level: parse("activity_level", &activity_level, |s| s.parse::<ActivityLevel>())?,
        goals: column(row, "goals")?,
        bmr: column(row, "bmr")?,
        tdee: column(row, "tdee")?,
        calorie_maintenance: column(row, "calorie_maintenance")?,
        notes: column(row, "notes")?,
        created_at: timestamp(row, "created_at")?,
        updated_at: timestamp(row, "updated_at")?,
    })
}
