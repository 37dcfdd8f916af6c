//! Shuffle-playlist handler - full rewrite of the shuffle playlist.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::error::HttpError;
use crate::state::AppState;

/// Response from a completed playlist rebuild.
#[derive(Debug, Serialize)]
pub struct ShuffleResponse {
    pub success: bool,
    pub message: String,
    /// Number of songs reinserted.
    pub count: usize,
}

/// Rebuild the shuffle playlist from the full song catalog.
///
/// Takes no body. Two concurrent calls race on the same rows; the store
/// gives no ordering guarantee between them.
pub async fn shuffle_all(State(state): State<AppState>) -> Result<Json<ShuffleResponse>, HttpError> {
    let summary = state.playlists.rebuild_shuffle().await?;

    Ok(Json(ShuffleResponse {
        success: true,
        message: summary.message(),
        count: summary.song_count,
    }))
}
