//! Application layer - repositories and handlers.
//!
//! Orchestrates domain operations over the ports. Nothing here knows which
//! storage backend or chat provider is plugged in.

pub mod handlers;
pub mod repositories;

pub use handlers::{
    AdminCredentials, AuthGate, ChatCommand, ChatHandler, ChatResult, ChatSettings, ChatUsage,
};
pub use repositories::{ClientRepository, PlanRepository, SessionRepository};
