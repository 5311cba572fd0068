//! Authentication adapters.
//!
//! Implementations of the `AccessTokens` port:
//!
//! - `jwt` - HS256 tokens signed with the configured shared secret
//! - `mock` - Test implementation that needs no secret

mod jwt;
mod mock;

pub use jwt::{JwtAccessTokens, JwtConfig};
pub use mock::MockAccessTokens;
