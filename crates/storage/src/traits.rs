//! Storage backend trait abstraction
//!
//! The persistent counter store as seen by the service layer. Implementations
//! must apply [`RatingStore::record_vote`] atomically.

use async_trait::async_trait;
use songvote_core::{RatingRecord, Vote};

use crate::error::StorageError;

/// Per-track win/appearance counters.
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Get the record for a track id, if it has ever been voted on.
    async fn get_rating(&self, id: i64) -> Result<Option<RatingRecord>, StorageError>;

    /// Insert or replace a record.
    async fn upsert_rating(&self, record: &RatingRecord) -> Result<(), StorageError>;

    /// Apply a vote to both records as one unit. Returns `(winner, loser)`
    /// after the update.
    async fn record_vote(&self, vote: &Vote) -> Result<(RatingRecord, RatingRecord), StorageError>;

    /// Highest-approval records first.
    async fn top_ratings(&self, limit: usize) -> Result<Vec<RatingRecord>, StorageError>;

    /// Number of stored records.
    async fn count_ratings(&self) -> Result<usize, StorageError>;
}
