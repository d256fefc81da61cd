use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use songvote_catalog::{CatalogClient, TrackCatalogProvider, load_artist_file};
use songvote_core::blocklist::default_blocklist;
use songvote_core::constants::DEFAULT_CATALOG_URL;
use songvote_core::env_config::{env_parse_with_default, env_string};
use songvote_core::{Blocklist, Catalog};
use songvote_http::{AppState, create_router};
use songvote_service::{MatchupService, VoteService};
use songvote_storage::Storage;

use crate::{ensure_db_dir, get_db_path};

const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 15;

/// `--blocklist` wins over `SONGVOTE_BLOCKLIST`, which wins over the
/// built-in list. An explicitly empty value disables blocking.
fn resolve_blocklist(flag: Option<String>) -> Blocklist {
    match flag.or_else(|| std::env::var("SONGVOTE_BLOCKLIST").ok()) {
        Some(csv) => Blocklist::from_csv(&csv),
        None => default_blocklist(),
    }
}

/// Any failure before the upstream fetch (unreadable artist list, HTTP client
/// setup) is logged and yields an empty catalog; the server still starts.
async fn load_catalog(artists: Option<PathBuf>) -> Catalog {
    let Some(path) = artists else {
        tracing::warn!("no artist list given (--artists), starting with an empty catalog");
        return Catalog::empty();
    };
    let entries = match load_artist_file(&path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "artist list unusable, starting with an empty catalog");
            return Catalog::empty();
        },
    };

    let base_url =
        env_string("SONGVOTE_CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_owned());
    let timeout = Duration::from_secs(env_parse_with_default(
        "SONGVOTE_CATALOG_TIMEOUT_SECS",
        DEFAULT_CATALOG_TIMEOUT_SECS,
    ));
    let client = match CatalogClient::new(&base_url, timeout) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(
                error = %e,
                "catalog client unavailable, starting with an empty catalog"
            );
            return Catalog::empty();
        },
    };
    tracing::info!(base_url = client.base_url(), "fetching track catalog");
    client.load_catalog(&entries).await
}

pub(crate) async fn run(
    host: String,
    port: u16,
    artists: Option<PathBuf>,
    blocklist: Option<String>,
) -> Result<()> {
    let db_path = get_db_path()?;
    ensure_db_dir(&db_path)?;
    let storage = Arc::new(Storage::new(&db_path)?);

    let catalog = load_catalog(artists).await;
    let blocklist = resolve_blocklist(blocklist);
    tracing::info!(blocked_artists = blocklist.len(), "blocklist ready");

    let matchup_service = MatchupService::new(Arc::new(catalog), Arc::new(blocklist));
    if !matchup_service.is_available() {
        tracing::warn!(
            tracks = matchup_service.catalog_size(),
            "catalog too small for matchups, /songs will answer 500 until restarted"
        );
    }

    let state = Arc::new(AppState {
        matchup_service: Arc::new(matchup_service),
        vote_service: Arc::new(VoteService::new(storage)),
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocklist_flag_overrides_default() {
        let blocklist = resolve_blocklist(Some("Nickelback, Creed".to_owned()));
        assert!(blocklist.is_blocked("nickelback"));
        assert!(blocklist.is_blocked("CREED"));
        assert!(!blocklist.is_blocked("Sexyy Red"));
    }

    #[test]
    fn test_empty_blocklist_flag_disables_blocking() {
        let blocklist = resolve_blocklist(Some(String::new()));
        assert!(blocklist.is_empty());
    }

    #[tokio::test]
    async fn test_no_artist_file_is_empty_catalog() {
        let catalog = load_catalog(None).await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_missing_artist_file_starts_degraded() {
        let dir = tempfile::TempDir::new().unwrap();
        let catalog = load_catalog(Some(dir.path().join("missing.json"))).await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_artist_file_starts_degraded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("artists.json");
        std::fs::write(&path, "not json").unwrap();
        let catalog = load_catalog(Some(path)).await;
        assert!(catalog.is_empty());
        assert!(!catalog.is_playable());
    }
}
