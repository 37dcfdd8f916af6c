//! Shuffle-playlist domain types.
//!
//! The backing store belongs to a BlackCandy instance; this service only
//! ever rewrites one of its playlists. The playlist id is fixed by that
//! deployment, not negotiated at runtime.

use serde::{Deserialize, Serialize};

/// Id of the BlackCandy "Shuffle" playlist this service rebuilds.
pub const SHUFFLE_PLAYLIST_ID: i64 = 3;

/// Outcome of a shuffle-playlist rebuild.
///
/// Membership after a rebuild equals the full song catalog, with `position`
/// a dense `1..=song_count` sequence in reverse-creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebuildSummary {
    /// Playlist that was rewritten.
    pub playlist_id: i64,
    /// Number of songs reinserted.
    pub song_count: usize,
}

impl RebuildSummary {
    /// Human-readable completion message, as shown to API and CLI callers.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Playlist {} reset and shuffled with {} songs.",
            self.playlist_id, self.song_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_playlist_and_count() {
        let summary = RebuildSummary {
            playlist_id: SHUFFLE_PLAYLIST_ID,
            song_count: 42,
        };
        assert_eq!(
            summary.message(),
            "Playlist 3 reset and shuffled with 42 songs."
        );
    }

    #[test]
    fn summary_serializes_with_named_fields() {
        let summary = RebuildSummary {
            playlist_id: 3,
            song_count: 7,
        };
        let json = serde_json::to_value(summary).unwrap();
        assert!(json.is_object());
        assert_eq!(json["playlist_id"], 3);
        assert_eq!(json["song_count"], 7);
    }
}
