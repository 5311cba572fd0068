//! Entity repositories.
//!
//! Backend-agnostic business logic over the storage ports. Each backend
//! implements only the narrow store; everything here is shared.

mod client;
mod plan;
mod session;

pub use client::ClientRepository;
pub use plan::PlanRepository;
pub use session::SessionRepository;
