//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which build the adapters they need
//! from environment-resolved settings.

use clap::Parser;

use bchelper_cli::{Cli, Commands, handlers};
use bchelper_core::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    match cli.command {
        Commands::Serve { port } => handlers::handle_serve(settings, port).await,
        Commands::Download { url } => handlers::handle_download(&settings, &url).await,
        Commands::ShuffleAll => handlers::handle_shuffle_all(&settings).await,
        Commands::Paths => {
            handlers::handle_paths(&settings);
            Ok(())
        }
    }
}
