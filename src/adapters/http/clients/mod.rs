//! HTTP adapter for client endpoints.

mod dto;
mod handlers;

pub use dto::{ClientResponse, CreatedClientResponse};

use axum::{routing::get, Router};

use super::state::AppState;
use handlers::{create_client, delete_client, get_client, list_clients, update_client};

/// Routes mounted under `/clients`.
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route("/:id", get(get_client).put(update_client).delete(delete_client))
}
