//! AuthGate - credential checks and bearer token issuance.
//!
//! The configured administrator pair is checked first with a constant-time
//! comparison. Stored credentials are consulted second and verified with
//! bcrypt. Failures never say which factor was wrong.

use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::domain::foundation::{AuthError, AuthenticatedUser, DomainError, ErrorCode};
use crate::domain::user::Credential;
use crate::ports::{AccessTokens, CredentialStore};

/// Minimum password length accepted by `register`.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashed at the configured cost and verified against when a username has
/// no active credential, so unknown users cost as much as wrong passwords.
const DECOY_PASSWORD: &str = "coach-api-decoy-credential";

/// The single configured administrator login.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: Secret<String>,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = constant_time_compare(username.as_bytes(), self.username.as_bytes());
        let pass_ok =
            constant_time_compare(password.as_bytes(), self.password.expose_secret().as_bytes());
        user_ok & pass_ok
    }
}

/// Credential check and token service.
pub struct AuthGate {
    admin: AdminCredentials,
    credentials: Arc<dyn CredentialStore>,
    tokens: Arc<dyn AccessTokens>,
    hash_cost: u32,
    decoy_hash: Option<String>,
}

impl AuthGate {
    pub fn new(
        admin: AdminCredentials,
        credentials: Arc<dyn CredentialStore>,
        tokens: Arc<dyn AccessTokens>,
    ) -> Self {
        Self {
            admin,
            credentials,
            tokens,
            hash_cost: bcrypt::DEFAULT_COST,
            decoy_hash: decoy_hash(bcrypt::DEFAULT_COST),
        }
    }

    /// Overrides the bcrypt cost used by `register`.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self.decoy_hash = decoy_hash(cost);
        self
    }

    /// Checks a username/password pair.
    ///
    /// Returns `None` for any mismatch, unknown user or inactive credential.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthenticatedUser>, DomainError> {
        if self.admin.matches(username, password) {
            debug!(username, "administrator authenticated");
            return Ok(Some(AuthenticatedUser::new(username)));
        }

        let verified = match self.credentials.find(username).await? {
            Some(credential) if credential.active => {
                bcrypt::verify(password, &credential.password_hash).unwrap_or(false)
            }
            _ => {
                if let Some(decoy) = &self.decoy_hash {
                    let _ = bcrypt::verify(password, decoy);
                }
                false
            }
        };

        if verified {
            debug!(username, "stored credential authenticated");
            Ok(Some(AuthenticatedUser::new(username)))
        } else {
            warn!("login rejected");
            Ok(None)
        }
    }

    /// Signs a time-limited bearer token for `user`.
    pub fn issue_token(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        self.tokens.issue(user)
    }

    /// Verifies a bearer token. Malformed input is an error, never a panic.
    pub fn verify_token(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.tokens.verify(token)
    }

    /// Stores a new active credential with a bcrypt hash of `password`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank username
    /// - `ValidationFailed` for a short password or a taken username
    pub async fn register(&self, username: &str, password: &str) -> Result<(), DomainError> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }
        if username == self.admin.username {
            return Err(DomainError::validation("username", "Username already exists"));
        }

        let hash = bcrypt::hash(password, self.hash_cost)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, format!("hash password: {}", e)))?;
        let credential = Credential::new(username, hash)?;

        if !self.credentials.insert(&credential).await? {
            return Err(DomainError::validation("username", "Username already exists"));
        }
        debug!(username, "credential registered");
        Ok(())
    }
}

fn decoy_hash(cost: u32) -> Option<String> {
    match bcrypt::hash(DECOY_PASSWORD, cost) {
        Ok(hash) => Some(hash),
        Err(e) => {
            warn!(cost, error = %e, "could not prepare decoy hash");
            None
        }
    }
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
