use serde::{Deserialize, Serialize};

use crate::error::InvalidVote;
use crate::rating::RatingRecord;

/// Raw `POST /vote` payload. Every field is optional on the wire so that a
/// missing field is reported as an invalid vote rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteRequest {
    pub winner_id: Option<i64>,
    pub loser_id: Option<i64>,
    pub winner_title: Option<String>,
    pub winner_artist: Option<String>,
    pub loser_title: Option<String>,
    pub loser_artist: Option<String>,
}

/// A validated vote: both ids present, non-zero and distinct, display
/// metadata non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub winner_id: i64,
    pub winner_title: String,
    pub winner_artist: String,
    pub loser_id: i64,
    pub loser_title: String,
    pub loser_artist: String,
}

fn require_id(value: Option<i64>, field: &str) -> Result<i64, InvalidVote> {
    match value {
        Some(id) if id != 0 => Ok(id),
        _ => Err(InvalidVote(format!("missing field `{field}`"))),
    }
}

fn require_text(value: Option<String>, field: &str) -> Result<String, InvalidVote> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(InvalidVote(format!("missing field `{field}`"))),
    }
}

impl TryFrom<VoteRequest> for Vote {
    type Error = InvalidVote;

    fn try_from(req: VoteRequest) -> Result<Self, Self::Error> {
        let vote = Self {
            winner_id: require_id(req.winner_id, "winner_id")?,
            loser_id: require_id(req.loser_id, "loser_id")?,
            winner_title: require_text(req.winner_title, "winner_title")?,
            winner_artist: require_text(req.winner_artist, "winner_artist")?,
            loser_title: require_text(req.loser_title, "loser_title")?,
            loser_artist: require_text(req.loser_artist, "loser_artist")?,
        };
        if vote.winner_id == vote.loser_id {
            return Err(InvalidVote(format!(
                "winner and loser must differ (both are {})",
                vote.winner_id
            )));
        }
        Ok(vote)
    }
}

impl Vote {
    /// Record used when the winner has never been voted on.
    #[must_use]
    pub fn winner_seed(&self) -> RatingRecord {
        RatingRecord::new(self.winner_id, &self.winner_title, &self.winner_artist)
    }

    /// Record used when the loser has never been voted on.
    #[must_use]
    pub fn loser_seed(&self) -> RatingRecord {
        RatingRecord::new(self.loser_id, &self.loser_title, &self.loser_artist)
    }
}
