//! yt-dlp process orchestration.
//!
//! One fetch is one child process: spawn with the fixed flag set, capture
//! stderr, wait bounded by the timeout. `kill_on_drop` reaps the child when
//! the timeout drops the in-flight future.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use bchelper_core::{FetchError, MediaFetcher, Settings};

/// Configuration for the downloader invocation.
#[derive(Debug, Clone)]
pub struct YtDlpConfig {
    /// Downloader binary; bare names resolve through `PATH`.
    pub bin: PathBuf,
    /// Directory downloads land in.
    pub download_dir: PathBuf,
    /// Wall-clock budget for one invocation.
    pub timeout: Duration,
}

impl YtDlpConfig {
    /// Build the invocation config from resolved settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            bin: settings.ytdlp_bin.clone(),
            download_dir: settings.download_dir.clone(),
            timeout: settings.download_timeout,
        }
    }
}

/// `MediaFetcher` implementation backed by the yt-dlp binary.
pub struct YtDlpFetcher {
    config: YtDlpConfig,
}

impl YtDlpFetcher {
    /// Create a fetcher with the given invocation config.
    #[must_use]
    pub const fn new(config: YtDlpConfig) -> Self {
        Self { config }
    }

    /// Assemble the full command line for one URL.
    ///
    /// The flag set is fixed: extract audio, opus at best quality, embed
    /// thumbnail and metadata, filename templated from the media title.
    fn command(&self, url: &str) -> Command {
        let output_template = self.config.download_dir.join("%(title)s.%(ext)s");

        let mut cmd = Command::new(&self.config.bin);
        cmd.arg("-x")
            .arg("--audio-format")
            .arg("opus")
            .arg("--audio-quality")
            .arg("0")
            .arg("--embed-thumbnail")
            .arg("--add-metadata")
            .arg("-o")
            .arg(&output_template)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl MediaFetcher for YtDlpFetcher {
    async fn fetch(&self, url: &str) -> Result<(), FetchError> {
        let mut cmd = self.command(url);
        let timeout_secs = self.config.timeout.as_secs();

        tracing::info!(target: "bchelper.download", url, "starting download");

        let output = match timeout(self.config.timeout, cmd.output()).await {
            // Dropping the future kills the child via kill_on_drop.
            Err(_elapsed) => {
                tracing::warn!(
                    target: "bchelper.download",
                    url,
                    timeout_secs,
                    "download timed out"
                );
                return Err(FetchError::TimedOut(timeout_secs));
            }
            Ok(result) => result.map_err(|e| FetchError::Spawn(e.to_string()))?,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(
                target: "bchelper.download",
                url,
                status = %output.status,
                "downloader failed"
            );
            return Err(FetchError::Failed { stderr });
        }

        tracing::info!(target: "bchelper.download", url, "download finished");
        Ok(())
    }
}
