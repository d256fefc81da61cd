use std::sync::Arc;

use axum::{Json, extract::State};
use songvote_core::Matchup;

use crate::AppState;
use crate::api_error::ApiError;

/// Two distinct, non-blocked tracks in random order.
pub async fn get_songs(State(state): State<Arc<AppState>>) -> Result<Json<Matchup>, ApiError> {
    Ok(Json(state.matchup_service.next_matchup()?))
}
