//! Typed error enum for the service layer.
//!
//! Lets handlers match on the failure mode (caller fault, empty catalog,
//! backend failure) instead of inspecting messages.

use songvote_core::{InvalidVote, MatchupError};
use songvote_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No matchup can be drawn from the loaded catalog.
    #[error("matchup: {0}")]
    Matchup(#[from] MatchupError),

    /// Caller sent a malformed vote.
    #[error(transparent)]
    InvalidVote(#[from] InvalidVote),

    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Whether the caller, not the server, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidVote(_))
    }
}
