//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the coaching domain.

mod auth;
mod errors;
mod ids;
mod ownership;
mod session_status;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClientId, SessionId, TenantId};
pub use ownership::OwnedByTenant;
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;
