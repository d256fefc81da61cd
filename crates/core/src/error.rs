use thiserror::Error;

/// Reasons a matchup cannot be drawn from the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchupError {
    /// Catalog holds fewer than two tracks.
    #[error("catalog has fewer than 2 tracks")]
    EmptyCatalog,

    /// Blocklist and distinctness leave fewer than two candidates.
    #[error("only {eligible} track(s) remain after applying the blocklist")]
    InsufficientCandidates { eligible: usize },
}

/// Malformed vote payload: a required field is missing or both ids are equal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid vote: {0}")]
pub struct InvalidVote(pub String);
