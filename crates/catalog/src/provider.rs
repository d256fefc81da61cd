use async_trait::async_trait;
use songvote_core::{Catalog, Track};

use crate::artists::ArtistEntry;
use crate::client::CatalogClient;

/// Source of the startup track catalog.
///
/// Loading never fails as a whole: artists whose lookup fails are skipped, and
/// an empty catalog is a valid (degraded) result.
#[async_trait]
pub trait TrackCatalogProvider: Send + Sync {
    async fn load_catalog(&self, artists: &[ArtistEntry]) -> Catalog;
}

impl CatalogClient {
    async fn tracks_for(&self, entry: &ArtistEntry) -> Option<Vec<Track>> {
        let artist_id = match self.search_artist(&entry.name).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                tracing::warn!(artist = %entry.name, "artist not found in catalog, skipping");
                return None;
            },
            Err(e) => {
                tracing::warn!(artist = %entry.name, error = %e, "artist lookup failed, skipping");
                return None;
            },
        };

        match self.top_tracks(artist_id, entry.limit).await {
            Ok(tracks) => Some(tracks),
            Err(e) => {
                tracing::warn!(
                    artist = %entry.name,
                    artist_id,
                    error = %e,
                    "top tracks lookup failed, skipping"
                );
                None
            },
        }
    }
}

#[async_trait]
impl TrackCatalogProvider for CatalogClient {
    async fn load_catalog(&self, artists: &[ArtistEntry]) -> Catalog {
        tracing::info!(artists = artists.len(), "loading track catalog");
        let mut collected: Vec<Track> = Vec::new();
        let mut skipped = 0_usize;
        for entry in artists {
            match self.tracks_for(entry).await {
                Some(tracks) => collected.extend(tracks),
                None => skipped = skipped.saturating_add(1),
            }
        }
        let catalog = Catalog::from_tracks(collected);
        tracing::info!(
            tracks = catalog.len(),
            skipped_artists = skipped,
            "track catalog loaded"
        );
        catalog
    }
}
