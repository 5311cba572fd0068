//! HTTP adapter - the REST surface over the repositories, auth gate and
//! chat proxy.
//!
//! Each resource has its own module with routes, handlers and DTOs. All
//! resource routes require a bearer token; records belong to the tenant in
//! `AppState`.

pub mod auth;
pub mod chat;
pub mod clients;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod plans;
mod router;
pub mod sessions;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, cors_layer, with_server_layers};
pub use state::AppState;
