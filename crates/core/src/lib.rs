//! Core types for songvote
//!
//! Domain types shared across all other crates: the track catalog, the artist
//! blocklist, rating records with their approval math, vote validation and the
//! matchup selector.

pub mod constants;
pub mod env_config;
mod error;
mod matchup;
mod rating;
mod track;
mod vote;

pub mod blocklist;

pub use blocklist::Blocklist;
pub use error::*;
pub use matchup::{Matchup, select_matchup};
pub use rating::{ApprovalView, RatingRecord, approval};
pub use track::{Catalog, Track};
pub use vote::{Vote, VoteRequest};
