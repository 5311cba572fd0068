//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and the outside world. Adapters implement these
//! ports.
//!
//! ## Persistence
//!
//! - `TenantRepository` - Tenant-scoped CRUD contract every entity
//!   repository satisfies
//! - `ClientStore`, `SessionStore`, `PlanStore`, `CredentialStore` - Narrow
//!   per-backend storage contracts the repositories are built on
//!
//! ## Auth
//!
//! - `AccessTokens` - Bearer token issuance and verification
//!
//! ## External Services
//!
//! - `AIProvider` - Chat-completion provider
//! - `Clock` - Current time and date

mod access_tokens;
mod ai_provider;
mod client_store;
mod clock;
mod credential_store;
mod persistence;
mod plan_store;
mod session_store;

pub use access_tokens::AccessTokens;
pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use client_store::ClientStore;
pub use clock::Clock;
pub use credential_store::CredentialStore;
pub use persistence::TenantRepository;
pub use plan_store::PlanStore;
pub use session_store::SessionStore;
