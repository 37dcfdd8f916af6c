//! Postgres implementation of the `PlaylistStore` trait.

use async_trait::async_trait;
use sqlx::Connection;

use bchelper_core::{PlaylistStore, RebuildSummary, SHUFFLE_PLAYLIST_ID, StoreError};

/// Postgres implementation of the `PlaylistStore` trait.
///
/// Holds only the connection string; a fresh connection is opened per
/// rebuild and dropped when it finishes.
pub struct PgPlaylistStore {
    database_url: String,
}

impl PgPlaylistStore {
    /// Create a store pointed at the given BlackCandy database.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }
}

#[async_trait]
impl PlaylistStore for PgPlaylistStore {
    async fn rebuild_shuffle(&self) -> Result<RebuildSummary, StoreError> {
        let mut conn = crate::setup::connect(&self.database_url).await?;

        let mut tx = conn.begin().await.map_err(storage_err)?;

        sqlx::query("DELETE FROM playlists_songs WHERE playlist_id = $1")
            .bind(SHUFFLE_PLAYLIST_ID)
            .execute(&mut *tx)
            .await
            .map_err(storage_err)?;

        let song_ids: Vec<i64> =
            sqlx::query_scalar("SELECT id FROM songs ORDER BY created_at DESC")
                .fetch_all(&mut *tx)
                .await
                .map_err(storage_err)?;

        // Positions are 1-based and dense; the SELECT above fixes the order.
        for (index, song_id) in song_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO playlists_songs (playlist_id, song_id, position) \
                 VALUES ($1, $2, $3)",
            )
            .bind(SHUFFLE_PLAYLIST_ID)
            .bind(song_id)
            .bind(index as i64 + 1)
            .execute(&mut *tx)
            .await
            .map_err(storage_err)?;
        }

        tx.commit().await.map_err(storage_err)?;

        tracing::info!(
            target: "bchelper.playlist",
            playlist_id = SHUFFLE_PLAYLIST_ID,
            songs = song_ids.len(),
            "shuffle playlist rebuilt"
        );

        Ok(RebuildSummary {
            playlist_id: SHUFFLE_PLAYLIST_ID,
            song_count: song_ids.len(),
        })
    }
}

fn storage_err(e: sqlx::Error) -> StoreError {
    StoreError::Storage(e.to_string())
}
