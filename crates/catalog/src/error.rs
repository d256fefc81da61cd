//! Typed error enum for the catalog crate.

use thiserror::Error;

/// Deezer's "Quota limit exceeded" error code, delivered with HTTP 200.
pub const QUOTA_EXCEEDED_CODE: i64 = 4;

/// Errors from upstream catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("upstream error {code}: {message}")]
    Upstream { code: i64, message: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("artist list {path}: {reason}")]
    ArtistFile { path: String, reason: String },
    #[error("all retries exhausted, last error: {0}")]
    RetriesExhausted(Box<CatalogError>),
}

impl CatalogError {
    /// Whether this error is transient and should be retried.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            Self::Upstream { code, .. } => *code == QUOTA_EXCEEDED_CODE,
            _ => false,
        }
    }
}
