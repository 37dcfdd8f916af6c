//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. Both concrete adapters are instantiated here.

use std::sync::Arc;

use anyhow::Result;

use bchelper_core::{MediaFetcher, PlaylistStore, Settings};
use bchelper_db::PgPlaylistStore;
use bchelper_download::{YtDlpConfig, YtDlpFetcher};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (the default; the UI is served from this process).
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Resolved runtime settings (database URL, downloader, timeout).
    pub settings: Settings,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config from environment-resolved settings.
    #[must_use]
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            port: settings.port,
            settings,
            cors: CorsConfig::default(),
        }
    }

    /// Override the listen port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the two ports the handlers call. Tests construct this directly
/// with mock implementations.
pub struct AxumContext {
    /// External downloader port.
    pub fetcher: Arc<dyn MediaFetcher>,
    /// Playlist store port.
    pub playlists: Arc<dyn PlaylistStore>,
}

/// Wire the concrete adapters from resolved settings.
#[must_use]
pub fn bootstrap(settings: &Settings) -> AxumContext {
    tracing::info!(
        target: "bchelper.http",
        download_dir = %settings.download_dir.display(),
        ytdlp_bin = %settings.ytdlp_bin.display(),
        timeout_secs = settings.download_timeout.as_secs(),
        "bootstrap resolved settings"
    );

    let fetcher = Arc::new(YtDlpFetcher::new(YtDlpConfig::from_settings(settings)));
    let playlists = Arc::new(PgPlaylistStore::new(settings.database_url.clone()));

    AxumContext { fetcher, playlists }
}

/// Start the web server with the given configuration.
///
/// Binds `0.0.0.0:<port>` and serves until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config.settings);
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("bchelper listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
