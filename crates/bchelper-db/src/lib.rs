//! Postgres implementation of the bchelper playlist store.
//!
//! The schema (`songs`, `playlists_songs`) is owned by the BlackCandy
//! deployment this service sits next to; nothing here creates or migrates
//! tables. Each operation opens its own connection and closes it on
//! completion - there is no pool and no state shared between requests.

pub mod playlist;
pub mod setup;

// Re-export the store and connector for convenient access
pub use playlist::PgPlaylistStore;
pub use setup::connect;
