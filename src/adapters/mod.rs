//! Adapters - Implementations of port interfaces.
//!
//! - `memory` / `postgres` - storage backends
//! - `auth` - bearer token signing
//! - `ai` - chat-completion providers
//! - `clock` - system and fixed clocks
//! - `http` - the axum REST surface

pub mod ai;
pub mod auth;
pub mod clock;
pub mod http;
pub mod memory;
pub mod postgres;

pub use clock::{FixedClock, SystemClock};
