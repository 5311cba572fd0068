//! HTTP adapter for week plan endpoints.

mod handlers;

use axum::{routing::get, Router};

use super::state::AppState;
use handlers::{get_week_plan, save_week_plan};

pub use handlers::{WeekQuery, ALLOWED_WEEK_OFFSETS};

/// Routes mounted under `/plans`.
pub fn plan_routes() -> Router<AppState> {
    Router::new().route("/weeks/:client_id", get(get_week_plan).put(save_week_plan))
}
