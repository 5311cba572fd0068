//! PlanRepository - week plans keyed by client and week start.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, TenantId};
use crate::domain::plan::{week_start_for, WeekPlan};
use crate::ports::{Clock, PlanStore};

/// Plan repository over any `PlanStore` backend.
///
/// Reads of a week nobody has saved synthesize an empty skeleton without
/// writing it. Saves replace the whole week.
pub struct PlanRepository {
    store: Arc<dyn PlanStore>,
    clock: Arc<dyn Clock>,
}

impl PlanRepository {
    pub fn new(store: Arc<dyn PlanStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Plan for the week `week_offset` weeks after the current one.
    ///
    /// Any offset is accepted here; the HTTP layer restricts it.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the shifted week cannot be represented
    pub async fn get_week_plan(
        &self,
        tenant: &TenantId,
        client_id: &ClientId,
        week_offset: i64,
    ) -> Result<WeekPlan, DomainError> {
        let week_start = week_start_for(self.clock.today(), week_offset).ok_or_else(|| {
            DomainError::new(
                ErrorCode::OutOfRange,
                format!("Week offset {} is outside the supported calendar", week_offset),
            )
        })?;

        match self.store.find(tenant, client_id, week_start).await? {
            Some(plan) => {
                debug!(tenant = %tenant, client_id = %client_id, %week_start, "stored plan");
                Ok(plan)
            }
            None => {
                debug!(tenant = %tenant, client_id = %client_id, %week_start, "empty plan synthesized");
                Ok(WeekPlan::empty(client_id.clone(), week_start))
            }
        }
    }

    /// Upsert `plan` for `client_id`, replacing any stored week.
    ///
    /// # Errors
    ///
    /// - `PlanKeyMismatch` if the plan names a different client
    /// - Validation errors if the week shape is wrong
    pub async fn save_week_plan(
        &self,
        tenant: &TenantId,
        client_id: &ClientId,
        plan: &WeekPlan,
    ) -> Result<(), DomainError> {
        if &plan.client_id != client_id {
            return Err(DomainError::new(
                ErrorCode::PlanKeyMismatch,
                format!(
                    "Plan is for client {} but was saved under client {}",
                    plan.client_id, client_id
                ),
            ));
        }
        plan.validate()?;

        self.store.upsert(tenant, plan).await?;
        debug!(
            tenant = %tenant,
            client_id = %client_id,
            week_start = %plan.week_start,
            workouts = plan.workout_count(),
            "plan saved"
        );
        Ok(())
    }
}
