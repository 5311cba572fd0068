//! Command handlers for authentication and chat.

mod auth_gate;
mod chat;

pub use auth_gate::{AdminCredentials, AuthGate, MIN_PASSWORD_LENGTH};
pub use chat::{
    ChatCommand, ChatHandler, ChatResult, ChatSettings, ChatUsage, COACH_SYSTEM_PROMPT,
};
