//! Shared constants for songvote.

/// Default upstream catalog API (Deezer public API).
pub const DEFAULT_CATALOG_URL: &str = "https://api.deezer.com";

/// Artists excluded from matchups unless overridden by configuration.
pub const DEFAULT_BLOCKED_ARTISTS: &[&str] = &["sexyy red", "charli xcx"];

/// Default number of records returned by the leaderboard.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Upper bound on leaderboard size (DoS protection).
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

/// Message returned while the catalog cannot produce a matchup.
pub const CATALOG_UNAVAILABLE: &str = "song catalog is empty or unavailable";
