//! Track catalog provider backed by a Deezer-compatible HTTP API.
//!
//! The catalog is built once at startup from a list of artists. Lookups that
//! fail for one artist are logged and skipped so that a partial outage only
//! shrinks the catalog.

mod api_types;
pub mod artists;
pub mod client;
pub mod error;
mod provider;


pub use artists::{ArtistEntry, load_artist_file};
pub use client::CatalogClient;
pub use error::CatalogError;
pub use provider::TrackCatalogProvider;
