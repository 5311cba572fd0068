//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `client` - Gym-client profiles
//! - `session` - Scheduled coaching sessions
//! - `plan` - Weekly workout plans and week arithmetic
//! - `user` - Login credentials

pub mod client;
pub mod foundation;
pub mod plan;
pub mod session;
pub mod user;
