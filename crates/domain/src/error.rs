//! Common error type used across the workspace.
//!
//! Each adapter defines its own typed error enum and converts into
//! [`HivemindError`] at the port boundary. Absence of an entity is **not**
//! an error at the storage layer — reads return `Option` — so the only
//! failure a store can surface is a genuine persistence problem.

/// Top-level error shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum HivemindError {
    /// A storage adapter failed (IO, serialization).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
