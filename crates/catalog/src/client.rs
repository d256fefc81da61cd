use std::time::Duration;

use serde::de::DeserializeOwned;
use songvote_core::Track;

use crate::api_types::{ArtistHit, Envelope, TrackJson};
use crate::error::CatalogError;

/// Default per-request timeout for upstream calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
/// Retries after the first attempt for transient failures.
pub const MAX_RETRIES: usize = 2;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Client for the upstream music catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) retry_delay: Duration,
}

impl CatalogClient {
    /// Creates a client for `base_url` (e.g. `https://api.deezer.com`).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url, retry_delay: DEFAULT_RETRY_DELAY })
    }

    /// Sets the base delay between retries (doubled on each attempt).
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up an artist by name and return the id of the best match.
    ///
    /// # Errors
    /// Returns an error if the request fails after retries or the response
    /// cannot be parsed.
    pub async fn search_artist(&self, name: &str) -> Result<Option<i64>, CatalogError> {
        let url = format!("{}/search/artist", self.base_url);
        let hits: Vec<ArtistHit> = self.get_list(&url, &[("q", name.to_owned())]).await?;
        if let Some(hit) = hits.first() {
            tracing::debug!(artist = name, matched = %hit.name, id = hit.id, "artist resolved");
        }
        Ok(hits.first().map(|hit| hit.id))
    }

    /// Fetch up to `limit` top tracks for an artist, dropping tracks without
    /// a preview.
    ///
    /// # Errors
    /// Returns an error if the request fails after retries or the response
    /// cannot be parsed.
    pub async fn top_tracks(&self, artist_id: i64, limit: u32) -> Result<Vec<Track>, CatalogError> {
        let url = format!("{}/artist/{artist_id}/top", self.base_url);
        let tracks: Vec<TrackJson> =
            self.get_list(&url, &[("limit", limit.to_string())]).await?;
        Ok(tracks.into_iter().filter_map(TrackJson::into_track).collect())
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, CatalogError> {
        let mut last_error: Option<CatalogError> = None;

        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let factor = 1_u32 << (attempt - 1).min(8);
                let delay = self.retry_delay.saturating_mul(factor);
                tokio::time::sleep(delay).await;
                tracing::warn!("catalog retry attempt {attempt}/{MAX_RETRIES} after {delay:?}");
            }

            match self.get_once::<T>(url, query).await {
                Ok(items) => return Ok(items),
                Err(err) if err.is_transient() => last_error = Some(err),
                Err(err) => return Err(err),
            }
        }

        Err(CatalogError::RetriesExhausted(Box::new(last_error.unwrap_or_else(|| {
            CatalogError::HttpStatus { code: 0, body: "no attempt made".to_owned() }
        }))))
    }

    async fn get_once<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, CatalogError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, 200).to_owned(),
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| CatalogError::JsonParse {
                context: format!("{url} (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        if let Some(err) = envelope.error {
            return Err(CatalogError::Upstream { code: err.code, message: err.message });
        }
        Ok(envelope.data)
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
