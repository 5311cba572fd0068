//! HTTP adapter for session endpoints.

mod dto;
mod handlers;

pub use dto::{CreatedSessionResponse, SessionResponse};

use axum::{routing::get, Router};

use super::state::AppState;
use handlers::{
    create_session, delete_session, get_session, list_by_date, list_sessions, list_today,
    update_session,
};

/// Routes mounted under `/sessions`.
///
/// `/today` and `/date/:date` take precedence over `/:id`.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route("/today", get(list_today))
        .route("/date/:date", get(list_by_date))
        .route("/:id", get(get_session).put(update_session).delete(delete_session))
}
