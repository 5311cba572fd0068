//! User domain module.
//!
//! Login credentials checked by the auth gate after the configured
//! administrator pair.

mod credential;

pub use credential::Credential;
