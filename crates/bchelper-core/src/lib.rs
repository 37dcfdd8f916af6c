//! Core domain types and port definitions for bchelper.
//!
//! This crate holds the pieces every adapter shares: the shuffle-playlist
//! domain types, the port traits the infrastructure crates implement
//! (`MediaFetcher`, `PlaylistStore`), the error types those ports speak,
//! and the environment-backed [`Settings`].
//!
//! No `sqlx`, `axum`, or process-handling types appear in any signature
//! here; adapters map their own failures into the port error types.

pub mod domain;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{RebuildSummary, SHUFFLE_PLAYLIST_ID};
pub use ports::{FetchError, MediaFetcher, PlaylistStore, StoreError};
pub use settings::Settings;

#[cfg(feature = "test-utils")]
pub use ports::{MockMediaFetcher, MockPlaylistStore};
