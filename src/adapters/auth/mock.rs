//! Mock access token adapter for testing.
//!
//! Issues predictable tokens and remembers them, so tests can authenticate
//! without a signing secret.
//!
//! # Example
//!
//! ```ignore
//! let tokens = MockAccessTokens::new()
//!     .with_user("valid-token", AuthenticatedUser::new("admin"));
//!
//! assert!(tokens.verify("valid-token").is_ok());
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::AccessTokens;

/// Mock token adapter.
///
/// Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockAccessTokens {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all verifications
    force_error: RwLock<Option<AuthError>>,
}

impl MockAccessTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), user);
        self
    }

    /// Forces all verifications to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl AccessTokens for MockAccessTokens {
    fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        let token = format!("mock-token-{}-{}", user.username, tokens.len() + 1);
        tokens.insert(token.clone(), user.clone());
        Ok(token)
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_token_verifies() {
        let tokens = MockAccessTokens::new().with_user("valid-token", AuthenticatedUser::new("admin"));
        assert_eq!(tokens.verify("valid-token").unwrap().username, "admin");
    }

    #[test]
    fn unknown_token_is_invalid() {
        let tokens = MockAccessTokens::new();
        assert_eq!(tokens.verify("unknown"), Err(AuthError::InvalidToken));
    }

    #[test]
    fn issued_tokens_are_distinct_and_verifiable() {
        let tokens = MockAccessTokens::new();
        let user = AuthenticatedUser::new("coach");

        let first = tokens.issue(&user).unwrap();
        let second = tokens.issue(&user).unwrap();

        assert_ne!(first, second);
        assert_eq!(tokens.verify(&second).unwrap(), user);
        assert_eq!(tokens.token_count(), 2);
    }

    #[test]
    fn forced_error_wins() {
        let tokens = MockAccessTokens::new()
            .with_user("valid-token", AuthenticatedUser::new("admin"))
            .with_error(AuthError::TokenExpired);
        assert_eq!(tokens.verify("valid-token"), Err(AuthError::TokenExpired));
    }
}
