use std::sync::Arc;

use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    extract::{Path, Query, State},
};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::LeaderboardQuery;
use crate::response_types::RatingResponse;

pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Result<Json<Vec<RatingResponse>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let records = state.vote_service.leaderboard(query.limit).await?;
    Ok(Json(records.into_iter().map(RatingResponse::from).collect()))
}

pub async fn get_rating(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<RatingResponse>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    match state.vote_service.get_rating(id).await? {
        Some(record) => Ok(Json(record.into())),
        None => Err(ApiError::NotFound(format!("no rating for track {id}"))),
    }
}
