//! Storage layer for songvote
//!
//! SQLite-backed persistent counter store. Rating records are created lazily
//! on the first vote that references a track and are never deleted.

mod error;
mod migrations;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use storage::Storage;
pub use traits::RatingStore;
