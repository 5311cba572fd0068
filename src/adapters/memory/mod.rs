//! In-memory storage backend.
//!
//! Document-style stores addressed by composite keys. Selected with
//! `storage.backend = "memory"`; data lives for the life of the process.

mod clients;
mod credentials;
mod plans;
mod sessions;
mod table;

pub use clients::InMemoryClientStore;
pub use credentials::InMemoryCredentialStore;
pub use plans::InMemoryPlanStore;
pub use sessions::InMemorySessionStore;
