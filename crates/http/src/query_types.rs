//! Request/query types (Deserialize)

use serde::Deserialize;
use songvote_core::constants::DEFAULT_LEADERBOARD_LIMIT;

const fn default_limit() -> usize {
    DEFAULT_LEADERBOARD_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}
