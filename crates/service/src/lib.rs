//! Service layer for songvote
//!
//! Centralizes the game rules between the HTTP handlers / CLI and the
//! catalog and storage crates.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
mod matchup_service;
mod vote_service;

pub use error::ServiceError;
pub use matchup_service::MatchupService;
pub use vote_service::{VoteOutcome, VoteService};
