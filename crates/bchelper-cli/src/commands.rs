//! Main commands enum.

use clap::Subcommand;

/// Available commands for the BlackCandy helper tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web front-end
    Serve {
        /// Port to listen on (overrides BCHELPER_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Download a media URL through the external downloader
    Download {
        /// URL to download
        url: String,
    },

    /// Rebuild the Shuffle playlist from the full song catalog
    ShuffleAll,

    /// Show the resolved configuration
    Paths,
}
