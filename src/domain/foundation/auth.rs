//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is what the auth gate hands back after a successful
//! credential check or token verification. It has no dependency on the token
//! format; the `AccessTokens` port populates it.

use thiserror::Error;

/// Identity bound to a login or a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Login name.
    pub username: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Token and credential-service errors.
///
/// A rejected username/password pair is not an error; `AuthGate::authenticate`
/// reports it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Token could not be produced or verified for an internal reason.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
