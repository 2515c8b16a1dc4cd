//! Storage-specific error type wrapping redb and serde_json errors.

use hivemind_domain::error::HivemindError;

/// Errors originating from the redb storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Opening or creating the database file failed.
    #[error("database error")]
    Database(#[from] redb::DatabaseError),

    /// Beginning a transaction failed.
    #[error("transaction error")]
    Transaction(#[from] redb::TransactionError),

    /// Opening a table failed.
    #[error("table error")]
    Table(#[from] redb::TableError),

    /// A read or write inside a transaction failed.
    #[error("storage error")]
    Storage(#[from] redb::StorageError),

    /// Committing a write transaction failed.
    #[error("commit error")]
    Commit(#[from] redb::CommitError),

    /// Failed to (de)serialize a stored JSON value.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for HivemindError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
