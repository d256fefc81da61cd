//! Artist list consumed by catalog loading.
//!
//! The list is a JSON array of `{"name": "...", "limit": N}` objects, where
//! `limit` caps how many top tracks are requested for that artist.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Top tracks requested when an entry omits `limit`.
pub const DEFAULT_TRACK_LIMIT: u32 = 5;

fn default_limit() -> u32 {
    DEFAULT_TRACK_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistEntry {
    pub name: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl ArtistEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, limit: u32) -> Self {
        Self { name: name.into(), limit }
    }
}

/// Parse an artist list from JSON text. Entries with a blank name or a zero
/// limit are dropped.
///
/// # Errors
/// Returns an error if the text is not a JSON array of artist entries.
pub fn parse_artist_list(json: &str) -> Result<Vec<ArtistEntry>, serde_json::Error> {
    let entries: Vec<ArtistEntry> = serde_json::from_str(json)?;
    Ok(entries
        .into_iter()
        .filter(|e| !e.name.trim().is_empty() && e.limit > 0)
        .collect())
}

/// Read and parse an artist list file.
///
/// # Errors
/// Returns [`CatalogError::ArtistFile`] if the file cannot be read or parsed.
pub fn load_artist_file(path: &Path) -> Result<Vec<ArtistEntry>, CatalogError> {
    let file_error = |reason: String| CatalogError::ArtistFile {
        path: path.display().to_string(),
        reason,
    };
    let text = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
    let entries = parse_artist_list(&text).map_err(|e| file_error(e.to_string()))?;
    tracing::info!(path = %path.display(), artists = entries.len(), "artist list loaded");
    Ok(entries)
}
