//! Week plan storage port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{ClientId, DomainError, TenantId};
use crate::domain::plan::WeekPlan;

/// Backend storage for week plans keyed by `(tenant, client_id, week_start)`.
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Stored plan for the key, if one was ever saved.
    async fn find(
        &self,
        tenant: &TenantId,
        client_id: &ClientId,
        week_start: NaiveDate,
    ) -> Result<Option<WeekPlan>, DomainError>;

    /// Insert or fully replace the plan stored under the plan's own key.
    async fn upsert(&self, tenant: &TenantId, plan: &WeekPlan) -> Result<(), DomainError>;
}
