//! Playlist store trait definition.
//!
//! This port abstracts the relational store owned by BlackCandy. The only
//! operation this service needs is the full shuffle-playlist rewrite.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::RebuildSummary;

/// Rewrites the shuffle playlist in the backing store.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Replace the shuffle playlist with every song in the catalog,
    /// positions reassigned from 1 in reverse-creation order.
    ///
    /// Runs in a single transaction; any failure aborts the whole rewrite.
    async fn rebuild_shuffle(&self) -> Result<RebuildSummary, StoreError>;
}
