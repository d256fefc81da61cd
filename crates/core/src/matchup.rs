//! Matchup selection: two distinct, non-blocked tracks drawn uniformly.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::blocklist::Blocklist;
use crate::error::MatchupError;
use crate::track::Track;

/// Unordered pair of tracks presented for a vote. Position carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "[Track; 2]")]
pub struct Matchup {
    pub first: Track,
    pub second: Track,
}

impl From<Matchup> for [Track; 2] {
    fn from(m: Matchup) -> Self {
        [m.first, m.second]
    }
}

#[cfg(test)]
impl Matchup {
    pub(crate) fn ids(&self) -> [i64; 2] {
        [self.first.id, self.second.id]
    }

    pub(crate) fn contains(&self, id: i64) -> bool {
        self.first.id == id || self.second.id == id
    }
}

/// Draw a matchup from `tracks`, skipping blocked artists.
///
/// The eligible subset is computed once per call and two distinct elements are
/// sampled from it directly, so the call never loops.
///
/// # Errors
/// [`MatchupError::EmptyCatalog`] when `tracks` has fewer than two entries,
/// [`MatchupError::InsufficientCandidates`] when fewer than two distinct,
/// non-blocked tracks remain.
pub fn select_matchup<R>(
    tracks: &[Track],
    blocklist: &Blocklist,
    rng: &mut R,
) -> Result<Matchup, MatchupError>
where
    R: Rng + ?Sized,
{
    if tracks.len() < 2 {
        return Err(MatchupError::EmptyCatalog);
    }

    let mut seen = HashSet::with_capacity(tracks.len());
    let eligible: Vec<&Track> = tracks
        .iter()
        .filter(|t| !blocklist.is_blocked(&t.artist))
        .filter(|t| seen.insert(t.id))
        .collect();

    let mut picked = eligible.choose_multiple(rng, 2);
    match (picked.next(), picked.next()) {
        (Some(first), Some(second)) => {
            Ok(Matchup { first: (*first).clone(), second: (*second).clone() })
        },
        _ => {
            tracing::debug!(
                total = tracks.len(),
                eligible = eligible.len(),
                "not enough candidates for a matchup"
            );
            Err(MatchupError::InsufficientCandidates { eligible: eligible.len() })
        },
    }
}
