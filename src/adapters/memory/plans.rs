//! In-memory week plan store.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::table::Table;
use crate::domain::foundation::{ClientId, DomainError, TenantId};
use crate::domain::plan::WeekPlan;
use crate::ports::PlanStore;

type PlanKey = (TenantId, ClientId, NaiveDate);

/// Plans keyed by `(tenant, client_id, week_start)`.
pub struct InMemoryPlanStore {
    rows: Table<PlanKey, WeekPlan>,
}

impl InMemoryPlanStore {
    pub fn new() -> Self {
        Self { rows: Table::new() }
    }

    /// Number of stored plans across all tenants.
    pub async fn len(&self) -> usize {
        self.rows.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryPlanStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn find(
        &self,
        tenant: &TenantId,
        client_id: &ClientId,
        week_start: NaiveDate,
    ) -> Result<Option<WeekPlan>, DomainError> {
        Ok(self
            .rows
            .get(&(tenant.clone(), client_id.clone(), week_start))
            .await)
    }

    async fn upsert(&self, tenant: &TenantId, plan: &WeekPlan) -> Result<(), DomainError> {
        let key = (tenant.clone(), plan.client_id.clone(), plan.week_start);
        self.rows.upsert(key, plan.clone()).await;
        Ok(())
    }
}
