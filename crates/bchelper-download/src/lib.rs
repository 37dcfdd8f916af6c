//! yt-dlp invocation adapter for bchelper.
//!
//! Implements the `MediaFetcher` port by spawning the external downloader
//! with a fixed argument list and a hard wall-clock timeout. The tool does
//! all the real work (extraction, transcoding, thumbnail and metadata
//! embedding); this crate only owns the process lifecycle.

mod ytdlp;

pub use ytdlp::{YtDlpConfig, YtDlpFetcher};
