//! Artist blocklist consulted during matchup selection.

use std::collections::HashSet;

use crate::constants::DEFAULT_BLOCKED_ARTISTS;

/// Set of artist names that never appear in a matchup.
///
/// Names are stored lowercased and trimmed; lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    artists: HashSet<String>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Blocklist {
    #[must_use]
    pub fn new<I, S>(artists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let artists = artists
            .into_iter()
            .map(|a| normalize(a.as_ref()))
            .filter(|a| !a.is_empty())
            .collect();
        Self { artists }
    }

    /// Parse a comma-separated list, e.g. `"Sexyy Red, Charli XCX"`.
    #[must_use]
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }

    #[must_use]
    pub fn is_blocked(&self, artist: &str) -> bool {
        !self.artists.is_empty() && self.artists.contains(&normalize(artist))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

/// The blocklist shipped with the service.
#[must_use]
pub fn default_blocklist() -> Blocklist {
    Blocklist::new(DEFAULT_BLOCKED_ARTISTS)
}
