//! Outbound adapters implementing the repository ports.
//!
//! - **persistence**: PostgreSQL via Diesel and a `bb8` pool
//! - **postgrest**: a hosted PostgREST endpoint over HTTP
//! - **memory**: a process-local store for local runs and tests
//! - **unconfigured**: rejects every call when no store is configured
//!
//! Adapters translate between domain types and store representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
pub mod postgrest;
pub mod unconfigured;

pub use memory::InMemoryStore;
pub use unconfigured::{UNCONFIGURED_MESSAGE, UnconfiguredStore};
