//! HTTP adapter for the chat proxy.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::middleware::RequireAuth;
use super::state::AppState;
use crate::application::handlers::{ChatCommand, ChatUsage};
use crate::ports::Message;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub user_input: String,
    #[serde(default)]
    pub conversation_history: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_history: Vec<Message>,
    pub usage: ChatUsage,
}

/// Routes mounted under `/chat`.
pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/", post(send_chat))
}

/// POST /chat
pub async fn send_chat(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let result = state
        .chat
        .send(ChatCommand {
            user_input: req.user_input,
            history: req.conversation_history,
        })
        .await?;

    Ok(Json(ChatResponse {
        response: result.response,
        conversation_history: result.history,
        usage: result.usage,
    }))
}
