//! HTTP handlers for session endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::dto::{parse_iso_date, CreatedSessionResponse, SessionResponse};
use crate::adapters::http::dto::MessageResponse;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::domain::session::{NewSession, Session, SessionUpdate};
use crate::ports::TenantRepository;

fn not_found(id: &SessionId) -> ApiError {
    ApiError::not_found(ErrorCode::SessionNotFound, "Session", id.as_str())
}

fn to_responses(sessions: Vec<Session>) -> Json<Vec<SessionResponse>> {
    Json(sessions.into_iter().map(Into::into).collect())
}

/// POST /sessions
///
/// An unknown `client_id` is a 400, not a 404.
pub async fn create_session(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    payload: Result<Json<NewSession>, JsonRejection>,
) -> Result<Json<CreatedSessionResponse>, ApiError> {
    let Json(new_session) = payload?;
    let id = state.sessions.create(&state.tenant, &new_session).await?;
    Ok(Json(CreatedSessionResponse {
        session_id: id.into_inner(),
    }))
}

/// GET /sessions
pub async fn list_sessions(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    Ok(to_responses(state.sessions.list(&state.tenant).await?))
}

/// GET /sessions/today
pub async fn list_today(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    Ok(to_responses(state.sessions.list_today(&state.tenant).await?))
}

/// GET /sessions/date/:date
pub async fn list_by_date(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(raw): Path<String>,
) -> Result<Json<Vec<SessionResponse>>, ApiError> {
    let date = parse_iso_date(&raw)
        .ok_or_else(|| ApiError::bad_request("date", format!("'{}' is not a YYYY-MM-DD date", raw)))?;
    Ok(to_responses(state.sessions.list_by_date(&state.tenant, date).await?))
}

/// GET /sessions/:id
pub async fn get_session(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let id = SessionId::new(id)?;
    match state.sessions.get(&id, &state.tenant).await? {
        Some(session) => Ok(Json(session.into())),
        None => Err(not_found(&id)),
    }
}

/// PUT /sessions/:id
pub async fn update_session(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    payload: Result<Json<SessionUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = SessionId::new(id)?;
    let Json(update) = payload?;
    if state.sessions.update(&id, &state.tenant, &update).await? {
        Ok(Json(MessageResponse::new("updated")))
    } else {
        Err(not_found(&id))
    }
}

/// DELETE /sessions/:id
pub async fn delete_session(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = SessionId::new(id)?;
    if state.sessions.delete(&id, &state.tenant).await? {
        Ok(Json(MessageResponse::new("deleted")))
    } else {
        Err(not_found(&id))
    }
}
