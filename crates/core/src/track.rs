use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A playable catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    pub title: String,
    pub artist: String,
    #[serde(rename = "cover")]
    pub cover_url: String,
    #[serde(rename = "preview")]
    pub preview_url: String,
}

/// Read-only set of tracks built once at startup and shared by reference.
///
/// Track ids are unique: [`Catalog::from_tracks`] keeps the position of the
/// first occurrence of an id and the data of the last one.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Arc<[Track]>,
}

impl Catalog {
    #[must_use]
    pub fn from_tracks(tracks: impl IntoIterator<Item = Track>) -> Self {
        let mut order: Vec<Track> = Vec::new();
        let mut index: HashMap<i64, usize> = HashMap::new();
        for track in tracks {
            match index.get(&track.id) {
                Some(&pos) => {
                    if let Some(slot) = order.get_mut(pos) {
                        *slot = track;
                    }
                },
                None => {
                    index.insert(track.id, order.len());
                    order.push(track);
                },
            }
        }
        Self { tracks: order.into() }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether the catalog is large enough to ever produce a matchup.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.tracks.len() >= 2
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: i64) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }
}
