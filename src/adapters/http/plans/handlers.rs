//! HTTP handlers for week plan endpoints.
//!
//! The plan body is the domain `WeekPlan` as-is; there is no separate DTO.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::adapters::http::dto::MessageResponse;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::ClientId;
use crate::domain::plan::WeekPlan;

/// Current week and next week.
pub const ALLOWED_WEEK_OFFSETS: [i64; 2] = [0, 1];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekQuery {
    #[serde(rename = "weekOffset", default)]
    pub week_offset: i64,
}

/// GET /plans/weeks/:client_id?weekOffset=0|1
pub async fn get_week_plan(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(client_id): Path<String>,
    query: Result<Query<WeekQuery>, QueryRejection>,
) -> Result<Json<WeekPlan>, ApiError> {
    let client_id = ClientId::new(client_id)?;
    let Query(query) = query?;
    if !ALLOWED_WEEK_OFFSETS.contains(&query.week_offset) {
        return Err(ApiError::bad_request(
            "weekOffset",
            "Week offset must be 0 (current week) or 1 (next week)",
        ));
    }

    let plan = state
        .plans
        .get_week_plan(&state.tenant, &client_id, query.week_offset)
        .await?;
    Ok(Json(plan))
}

/// PUT /plans/weeks/:client_id
pub async fn save_week_plan(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(client_id): Path<String>,
    payload: Result<Json<WeekPlan>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let client_id = ClientId::new(client_id)?;
    let Json(plan) = payload?;
    state
        .plans
        .save_week_plan(&state.tenant, &client_id, &plan)
        .await?;
    Ok(Json(MessageResponse::new("saved")))
}
