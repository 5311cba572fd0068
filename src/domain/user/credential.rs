//! Stored login credential.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// Username, salted password hash and active flag.
///
/// Only the hash is ever stored. Inactive credentials never authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password_hash: String,
    pub active: bool,
    pub created_at: Timestamp,
}

impl Credential {
    /// Creates an active credential from an already-hashed password.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Result<Self, ValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        Ok(Self {
            username,
            password_hash: password_hash.into(),
            active: true,
            created_at: Timestamp::now(),
        })
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_credential_is_active() {
        let cred = Credential::new("coach", "$2b$04$hash").unwrap();
        assert!(cred.active);
        assert_eq!(cred.username, "coach");
    }

    #[test]
    fn new_credential_rejects_blank_username() {
        assert!(Credential::new(" ", "hash").is_err());
    }

    #[test]
    fn deactivate_clears_flag() {
        let mut cred = Credential::new("coach", "hash").unwrap();
        cred.deactivate();
        assert!(!cred.active);
    }
}
