//! # hivemind-adapter-storage-redb
//!
//! Durable storage adapter backed by [redb](https://docs.rs/redb), an
//! embedded key-value store with single-writer / multi-reader transactions.
//!
//! Layout on disk: one table per entity kind (`sensor`, `switch`), keyed by
//! the entity id string, with JSON-encoded entities as the value bytes.
//! A table that has never been written to reads as empty, not as an error.
//!
//! The store is `Clone` + `Send` + `Sync` (backed by `Arc<Database>`) and
//! can be shared across async tasks.

pub mod error;
pub mod store;

pub use error::StorageError;
pub use store::RedbStore;
