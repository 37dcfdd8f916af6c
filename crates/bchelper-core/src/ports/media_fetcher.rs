//! Media fetcher trait definition.
//!
//! This port wraps the external downloader tool. Implementations own all
//! process-lifecycle details (argument list, timeout, stderr capture).

use async_trait::async_trait;

use super::FetchError;

/// Fetches and transcodes a media URL via the external downloader tool.
///
/// # Design Rules
///
/// - Express **intent**, not implementation detail
/// - Single attempt per call; no retry, no cancellation once invoked
/// - Must support a mock implementation for handler tests
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Download the media behind `url` into the configured directory.
    ///
    /// Returns once the downloader has exited. The output filename is
    /// derived from the media title by the tool itself.
    async fn fetch(&self, url: &str) -> Result<(), FetchError>;
}
