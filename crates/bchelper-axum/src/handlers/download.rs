//! Download handler - accepts a media URL and drives the fetcher port.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::state::AppState;

/// Request to download a media URL.
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    /// URL to hand to the downloader. Required and non-empty.
    pub url: Option<String>,
}

/// Response from a completed download.
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub success: bool,
    pub message: String,
}

/// Download a media URL through the external tool.
///
/// Validation happens before the fetcher port is touched: a missing or
/// empty `url` never spawns a process.
pub async fn download(
    State(state): State<AppState>,
    Json(req): Json<DownloadRequest>,
) -> Result<Json<DownloadResponse>, HttpError> {
    let url = match req.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(HttpError::BadRequest("URL is required".to_string())),
    };

    state.fetcher.fetch(&url).await?;

    Ok(Json(DownloadResponse {
        success: true,
        message: "Download completed and songs added to Shuffle playlist".to_string(),
    }))
}
