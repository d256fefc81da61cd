//! Async trait implementation for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use songvote_core::{RatingRecord, Vote};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::RatingStore;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// - `@ref arg` — `.clone()` a `&T`, pass as `&arg`
/// - `@val arg` — move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl RatingStore for Storage {
    async fn get_rating(&self, id: i64) -> Result<Option<RatingRecord>, StorageError> {
        delegate!(self, get_rating, @val id)
    }
    async fn upsert_rating(&self, record: &RatingRecord) -> Result<(), StorageError> {
        delegate!(self, upsert_rating, @ref record)
    }
    async fn record_vote(&self, vote: &Vote) -> Result<(RatingRecord, RatingRecord), StorageError> {
        delegate!(self, record_vote, @ref vote)
    }
    async fn top_ratings(&self, limit: usize) -> Result<Vec<RatingRecord>, StorageError> {
        delegate!(self, top_ratings, @val limit)
    }
    async fn count_ratings(&self) -> Result<usize, StorageError> {
        delegate!(self, count_ratings)
    }
}
