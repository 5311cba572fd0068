//! PostgreSQL implementation of PlanStore.
//!
//! Days are stored as one JSONB document per `(tenant, client_id, week_start)`
//! row, so an upsert replaces the whole week in a single statement.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::types::Json;
use sqlx::PgPool;

use super::rows::column;
use crate::domain::foundation::{ClientId, DomainError, TenantId};
use crate::domain::plan::{DayPlan, WeekPlan};
use crate::ports::PlanStore;

#[derive(Clone)]
pub struct PostgresPlanStore {
    pool: PgPool,
}

impl PostgresPlanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanStore for PostgresPlanStore {
    async fn find(
        &self,
        tenant: &TenantId,
        client_id: &ClientId,
        week_start: NaiveDate,
    ) -> Result<Option<WeekPlan>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT days FROM week_plans
            WHERE tenant = $1 AND client_id = $2 AND week_start = $3
            "#,
        )
        .bind(tenant.as_str())
        .bind(client_id.as_str())
        .bind(week_start)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch week plan", e))?;

        match row {
            Some(row) => {
                let Json(days): Json<Vec<DayPlan>> = column(&row, "days")?;
                Ok(Some(WeekPlan {
                    client_id: client_id.clone(),
                    week_start,
                    days,
                }))
            }
            None => Ok(None),
        }
    }

    async fn upsert(&self, tenant: &TenantId, plan: &WeekPlan) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO week_plans (tenant, client_id, week_start, days, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (tenant, client_id, week_start)
            DO UPDATE SET days = EXCLUDED.days, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(tenant.as_str())
        .bind(plan.client_id.as_str())
        .bind(plan.week_start)
        .bind(Json(&plan.days))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to save week plan", e))?;

        Ok(())
    }
}
