use std::sync::Arc;

use songvote_core::{Blocklist, Catalog, Matchup, select_matchup};

use crate::ServiceError;

/// Draws matchups from the catalog loaded at startup. Holds no locks; the
/// catalog and blocklist are immutable for the life of the process.
pub struct MatchupService {
    catalog: Arc<Catalog>,
    blocklist: Arc<Blocklist>,
}

impl MatchupService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, blocklist: Arc<Blocklist>) -> Self {
        Self { catalog, blocklist }
    }

    pub fn next_matchup(&self) -> Result<Matchup, ServiceError> {
        let mut rng = rand::thread_rng();
        let matchup = select_matchup(self.catalog.tracks(), &self.blocklist, &mut rng)?;
        tracing::debug!(first = matchup.first.id, second = matchup.second.id, "matchup drawn");
        Ok(matchup)
    }

    /// Whether the catalog holds enough tracks to ever serve a matchup.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.catalog.is_playable()
    }

    #[must_use]
    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }
}
