//! HTTP handlers for client endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::dto::{ClientResponse, CreatedClientResponse};
use crate::adapters::http::dto::MessageResponse;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::domain::client::{ClientUpdate, NewClient};
use crate::domain::foundation::{ClientId, ErrorCode};
use crate::ports::TenantRepository;

fn not_found(id: &ClientId) -> ApiError {
    ApiError::not_found(ErrorCode::ClientNotFound, "Client", id.as_str())
}

/// POST /clients
pub async fn create_client(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    payload: Result<Json<NewClient>, JsonRejection>,
) -> Result<Json<CreatedClientResponse>, ApiError> {
    let Json(new_client) = payload?;
    let id = state.clients.create(&state.tenant, &new_client).await?;
    Ok(Json(CreatedClientResponse {
        client_id: id.into_inner(),
    }))
}

/// GET /clients
pub async fn list_clients(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    let clients = state.clients.list(&state.tenant).await?;
    Ok(Json(clients.into_iter().map(Into::into).collect()))
}

/// GET /clients/:id
pub async fn get_client(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<ClientResponse>, ApiError> {
    let id = ClientId::new(id)?;
    match state.clients.get(&id, &state.tenant).await? {
        Some(client) => Ok(Json(client.into())),
        None => Err(not_found(&id)),
    }
}

/// PUT /clients/:id
pub async fn update_client(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    payload: Result<Json<ClientUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = ClientId::new(id)?;
    let Json(update) = payload?;
    if state.clients.update(&id, &state.tenant, &update).await? {
        Ok(Json(MessageResponse::new("updated")))
    } else {
        Err(not_found(&id))
    }
}

/// DELETE /clients/:id
pub async fn delete_client(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = ClientId::new(id)?;
    if state.clients.delete(&id, &state.tenant).await? {
        Ok(Json(MessageResponse::new("deleted")))
    } else {
        Err(not_found(&id))
    }
}
