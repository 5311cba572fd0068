//! Shared handler state.

use std::sync::Arc;

use crate::application::handlers::{AuthGate, ChatHandler};
use crate::application::repositories::{ClientRepository, PlanRepository, SessionRepository};
use crate::domain::foundation::TenantId;

/// Everything a handler needs, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientRepository>,
    pub sessions: Arc<SessionRepository>,
    pub plans: Arc<PlanRepository>,
    pub auth: Arc<AuthGate>,
    pub chat: Arc<ChatHandler>,
    /// Owner of every record reached through the API.
    pub tenant: TenantId,
}
