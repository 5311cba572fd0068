//! HS256 JWT adapter for the `AccessTokens` port.
//!
//! Tokens are signed with a shared secret and carry `sub`, `iss`, `iat` and
//! `exp`. Expiry is a fixed number of days from issuance.
//!
//! ```ignore
//! let tokens = JwtAccessTokens::new(JwtConfig::new(secret, "coach-api", 8), clock);
//! let token = tokens.issue(&AuthenticatedUser::new("admin"))?;
//! let user = tokens.verify(&token)?;
//! ```

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::{AccessTokens, Clock};

/// Signing configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    secret: Secret<String>,
    pub issuer: String,
    pub expiry_days: u32,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>, expiry_days: u32) -> Self {
        Self {
            secret: Secret::new(secret.into()),
            issuer: issuer.into(),
            expiry_days,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iss: String,
    iat: i64,
    exp: i64,
}

/// Shared-secret JWT issuer and verifier.
pub struct JwtAccessTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    expiry_days: u32,
    clock: Arc<dyn Clock>,
}

impl JwtAccessTokens {
    pub fn new(config: JwtConfig, clock: Arc<dyn Clock>) -> Self {
        let secret = config.secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: config.issuer,
            expiry_days: config.expiry_days,
            clock,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        // Expiry is checked against the injected clock in `verify`.
        validation.validate_exp = false;
        validation
    }
}

impl AccessTokens for JwtAccessTokens {
    fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let now = self.clock.now();
        let claims = Claims {
            sub: user.username.clone(),
            iss: self.issuer.clone(),
            iat: now.as_unix_secs(),
            exp: now.add_days(self.expiry_days as i64).as_unix_secs(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::service_unavailable(format!("token signing failed: {}", e)))
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        if data.claims.sub.trim().is_empty() {
            return Err(AuthError::InvalidToken);
        }
        if data.claims.exp <= self.clock.now().as_unix_secs() {
            tracing::debug!("Token expired");
            return Err(AuthError::TokenExpired);
        }
        Ok(AuthenticatedUser::new(data.claims.sub))
    }
}
