//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error. Every variant means the backend could not complete
/// the request; callers surface it as a server-side failure.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQL / constraint / busy-timeout failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The blocking task running the query panicked or was cancelled.
    #[error("storage task failed: {0}")]
    Join(String),
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err.to_string())
    }
}
