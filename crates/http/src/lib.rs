//! HTTP API server for songvote.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(missing_debug_implementations, reason = "Internal types")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use songvote_service::{MatchupService, VoteService};

pub use response_types::{RatingResponse, VoteResponse};

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Draws matchups from the startup catalog
    pub matchup_service: Arc<MatchupService>,
    /// Records votes and reads ratings
    pub vote_service: Arc<VoteService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/songs", get(handlers::songs::get_songs))
        .route("/get-songs", get(handlers::songs::get_songs))
        .route("/vote", post(handlers::votes::vote))
        .route("/ratings", get(handlers::ratings::leaderboard))
        .route("/ratings/{id}", get(handlers::ratings::get_rating))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
