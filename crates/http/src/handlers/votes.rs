use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use songvote_core::VoteRequest;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::VoteResponse;

pub async fn vote(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<VoteResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let outcome = state.vote_service.record_vote(request).await?;
    Ok(Json(outcome.into()))
}
