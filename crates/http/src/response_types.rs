//! Response types (Serialize)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use songvote_core::{ApprovalView, RatingRecord};
use songvote_service::VoteOutcome;

/// `POST /vote` body: both approvals keyed by the stringified track id.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteResponse(pub HashMap<String, ApprovalView>);

impl From<VoteOutcome> for VoteResponse {
    fn from(outcome: VoteOutcome) -> Self {
        let mut map = HashMap::with_capacity(2);
        map.insert(outcome.winner.id.to_string(), outcome.winner);
        map.insert(outcome.loser.id.to_string(), outcome.loser);
        Self(map)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingResponse {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub wins: u32,
    pub appearances: u32,
    pub approval: u32,
}

impl From<RatingRecord> for RatingResponse {
    fn from(record: RatingRecord) -> Self {
        let approval = record.approval();
        Self {
            id: record.id,
            title: record.title,
            artist: record.artist,
            wins: record.wins,
            appearances: record.appearances,
            approval,
        }
    }
}
