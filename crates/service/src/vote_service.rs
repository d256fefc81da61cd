use std::sync::Arc;

use serde::Serialize;
use songvote_core::constants::MAX_LEADERBOARD_LIMIT;
use songvote_core::{ApprovalView, RatingRecord, Vote, VoteRequest};
use songvote_storage::RatingStore;

use crate::ServiceError;

/// Approval ratings of both tracks after a vote was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteOutcome {
    pub winner: ApprovalView,
    pub loser: ApprovalView,
}

pub struct VoteService {
    store: Arc<dyn RatingStore>,
}

impl VoteService {
    #[must_use]
    pub fn new(store: Arc<dyn RatingStore>) -> Self {
        Self { store }
    }

    /// Validate and record a vote. Invalid payloads never reach the store.
    pub async fn record_vote(&self, request: VoteRequest) -> Result<VoteOutcome, ServiceError> {
        let vote = Vote::try_from(request)?;
        let (winner, loser) = self.store.record_vote(&vote).await?;
        tracing::info!(
            winner_id = winner.id,
            winner_approval = winner.approval(),
            loser_id = loser.id,
            loser_approval = loser.approval(),
            "vote recorded"
        );
        Ok(VoteOutcome { winner: winner.view(), loser: loser.view() })
    }

    pub async fn get_rating(&self, id: i64) -> Result<Option<RatingRecord>, ServiceError> {
        Ok(self.store.get_rating(id).await?)
    }

    /// Top records by approval. `limit` is clamped to `1..=MAX_LEADERBOARD_LIMIT`.
    pub async fn leaderboard(&self, limit: usize) -> Result<Vec<RatingRecord>, ServiceError> {
        let limit = limit.clamp(1, MAX_LEADERBOARD_LIMIT);
        Ok(self.store.top_ratings(limit).await?)
    }

    pub async fn rated_tracks(&self) -> Result<usize, ServiceError> {
        Ok(self.store.count_ratings().await?)
    }
}
