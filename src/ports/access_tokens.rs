//! Access token port - bearer token issuance and verification.
//!
//! # Contract
//!
//! Implementations must:
//! - Sign tokens so they cannot be forged without the shared secret
//! - Embed an expiry and reject tokens past it with `AuthError::TokenExpired`
//! - Return `AuthError::InvalidToken` for malformed or badly signed input,
//!   never panic

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Issues and verifies opaque bearer tokens.
pub trait AccessTokens: Send + Sync {
    /// Sign a token for `user`.
    ///
    /// # Errors
    ///
    /// - `AuthError::ServiceUnavailable` if signing fails
    fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError>;

    /// Verify a raw token (without the `Bearer ` prefix).
    fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_tokens_is_object_safe() {
        fn _accepts_dyn(_tokens: &dyn AccessTokens) {}
    }
}
