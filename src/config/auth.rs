//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest token secret accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Administrator credentials and bearer-token settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub admin_username: String,

    pub admin_password: Secret<String>,

    /// HMAC secret used to sign bearer tokens
    pub token_secret: Secret<String>,

    /// Token lifetime in days
    #[serde(default = "default_token_expiry_days")]
    pub token_expiry_days: u32,

    /// Tenant that owns every record the administrator touches
    #[serde(default = "default_tenant")]
    pub tenant: String,

    /// `iss` claim written into and required of every token
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl AuthConfig {
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.admin_username.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ADMIN_USERNAME"));
        }
        if self.admin_password.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ADMIN_PASSWORD"));
        }
        let secret = self.token_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__TOKEN_SECRET"));
        }
        if environment.requires_strong_secrets() && secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::TokenSecretTooShort(MIN_PRODUCTION_SECRET_BYTES));
        }
        if !(1..=365).contains(&self.token_expiry_days) {
            return Err(ValidationError::InvalidTokenExpiry);
        }
        if self.tenant.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__TENANT"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: String::new(),
            admin_password: Secret::new(String::new()),
            token_secret: Secret::new(String::new()),
            token_expiry_days: default_token_expiry_days(),
            tenant: default_tenant(),
            issuer: default_issuer(),
        }
    }
}

fn default_token_expiry_days() -> u32 {
    8
}

fn default_tenant() -> String {
    "admin".to_string()
}

fn default_issuer() -> String {
    "coach-api".to_string()
}
