use serde::Deserialize;
use songvote_core::Track;

/// Every list endpoint wraps its payload in `{"data": [...]}`; failures come
/// back as `{"error": {...}}`, often with HTTP 200.
#[derive(Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub error: Option<UpstreamError>,
}

#[derive(Deserialize)]
pub(crate) struct UpstreamError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
pub(crate) struct ArtistHit {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
pub(crate) struct TrackJson {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub preview: Option<String>,
    pub artist: ArtistRef,
    pub album: Option<AlbumRef>,
}

#[derive(Deserialize)]
pub(crate) struct ArtistRef {
    pub name: String,
}

#[derive(Deserialize)]
pub(crate) struct AlbumRef {
    pub cover_medium: Option<String>,
}

impl TrackJson {
    /// Tracks without a preview cannot be played in a matchup.
    pub(crate) fn into_track(self) -> Option<Track> {
        let preview_url = self.preview.filter(|p| !p.is_empty())?;
        Some(Track {
            id: self.id,
            title: self.title,
            artist: self.artist.name,
            cover_url: self.album.and_then(|a| a.cover_medium).unwrap_or_default(),
            preview_url,
        })
    }
}
