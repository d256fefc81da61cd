//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body
//! `{"error": "message"}` and the matching status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use songvote_core::constants::CATALOG_UNAVAILABLE;
use songvote_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: malformed body, missing vote field, bad query.
    BadRequest(String),
    /// 404 Not Found: no rating stored for the id.
    NotFound(String),
    /// 500 with message: the catalog cannot produce a matchup.
    CatalogUnavailable(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::CatalogUnavailable(msg) => {
                tracing::warn!(reason = %msg, "matchup requested but catalog cannot serve one");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            err if err.is_client_error() => Self::BadRequest(err.to_string()),
            ServiceError::Matchup(e) => {
                Self::CatalogUnavailable(format!("{CATALOG_UNAVAILABLE}: {e}"))
            },
            _ => Self::Internal(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use songvote_core::{InvalidVote, MatchupError};

    use super::*;

    #[test]
    fn test_status_mapping() {
        let bad: ApiError =
            ServiceError::from(InvalidVote("missing field `winner_id`".to_owned())).into();
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let empty: ApiError = ServiceError::from(MatchupError::EmptyCatalog).into();
        assert!(matches!(
            empty,
            ApiError::CatalogUnavailable(ref msg) if msg.starts_with(CATALOG_UNAVAILABLE)
        ));
        assert_eq!(empty.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let missing = ApiError::NotFound("no rating for track 7".to_owned());
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }
}
