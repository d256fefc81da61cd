use serde::{Deserialize, Serialize};

/// Approval rating as an integer percentage.
///
/// `wins * 100 / appearances`, truncated toward zero; `0` when the track has
/// never appeared.
#[must_use]
pub fn approval(wins: u32, appearances: u32) -> u32 {
    if appearances == 0 {
        return 0;
    }
    let pct = u64::from(wins) * 100 / u64::from(appearances);
    u32::try_from(pct).unwrap_or(u32::MAX)
}

/// Persisted per-track counters. Invariant: `wins <= appearances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub wins: u32,
    pub appearances: u32,
}

impl RatingRecord {
    /// Fresh record with zeroed counters, created on the first vote for `id`.
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self { id, title: title.into(), artist: artist.into(), wins: 0, appearances: 0 }
    }

    #[must_use]
    pub fn approval(&self) -> u32 {
        approval(self.wins, self.appearances)
    }

    pub fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
        self.appearances = self.appearances.saturating_add(1);
    }

    pub fn record_loss(&mut self) {
        self.appearances = self.appearances.saturating_add(1);
    }

    #[must_use]
    pub fn view(&self) -> ApprovalView {
        ApprovalView { id: self.id, approval: self.approval() }
    }
}

/// What a voter sees after a vote: `{"id": …, "approval": …}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalView {
    pub id: i64,
    pub approval: u32,
}
