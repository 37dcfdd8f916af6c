//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No process/filesystem implementation details
//! - Adapters map their own failures into these error types

pub mod media_fetcher;
pub mod playlist_store;

use thiserror::Error;

pub use media_fetcher::MediaFetcher;
pub use playlist_store::PlaylistStore;

#[cfg(any(test, feature = "test-utils"))]
pub use media_fetcher::MockMediaFetcher;
#[cfg(any(test, feature = "test-utils"))]
pub use playlist_store::MockPlaylistStore;

/// Errors from the external downloader invocation.
///
/// A fetch is a single attempt; none of these are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The downloader process could not be spawned at all.
    #[error("failed to launch downloader: {0}")]
    Spawn(String),

    /// The downloader exceeded its wall-clock budget and was killed.
    #[error("downloader timed out after {0} seconds")]
    TimedOut(u64),

    /// The downloader exited non-zero; carries its stderr verbatim.
    #[error("downloader failed: {stderr}")]
    Failed {
        /// Diagnostic text captured from the process's stderr.
        stderr: String,
    },
}

/// Errors from the playlist store.
///
/// Both variants carry the raw database error text; callers surface it
/// unmodified.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening the database connection failed.
    #[error("{0}")]
    Connect(String),

    /// A statement or the final commit failed.
    #[error("{0}")]
    Storage(String),
}
