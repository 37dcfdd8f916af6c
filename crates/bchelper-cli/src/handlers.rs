//! Command handlers.
//!
//! Each handler builds the adapter it needs from resolved settings and
//! maps port errors to a nonzero exit via anyhow.

use anyhow::{Context, Result};

use bchelper_axum::{ServerConfig, start_server};
use bchelper_core::{MediaFetcher, PlaylistStore, Settings};
use bchelper_db::PgPlaylistStore;
use bchelper_download::{YtDlpConfig, YtDlpFetcher};

/// Start the web server, optionally overriding the configured port.
pub async fn handle_serve(settings: Settings, port: Option<u16>) -> Result<()> {
    let mut config = ServerConfig::from_settings(settings);
    if let Some(port) = port {
        config = config.with_port(port);
    }
    start_server(config).await
}

/// Download one URL and report the outcome.
pub async fn handle_download(settings: &Settings, url: &str) -> Result<()> {
    let fetcher = YtDlpFetcher::new(YtDlpConfig::from_settings(settings));
    fetcher
        .fetch(url)
        .await
        .with_context(|| format!("download failed for {url}"))?;

    println!("Download completed: {url}");
    Ok(())
}

/// Rebuild the shuffle playlist and print the summary.
pub async fn handle_shuffle_all(settings: &Settings) -> Result<()> {
    let store = PgPlaylistStore::new(settings.database_url.clone());
    let summary = store
        .rebuild_shuffle()
        .await
        .context("shuffle playlist rebuild failed")?;

    println!("{}", summary.message());
    Ok(())
}

/// Print the resolved configuration.
pub fn handle_paths(settings: &Settings) {
    println!("database url:     {}", settings.database_url);
    println!("download dir:     {}", settings.download_dir.display());
    println!("downloader:       {}", settings.ytdlp_bin.display());
    println!("download timeout: {}s", settings.download_timeout.as_secs());
    println!("port:             {}", settings.port);
}
