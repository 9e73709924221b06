//! # podcast-dl
//!
//! Fetch the latest episode of a podcast into a local media directory.
//!
//! Podcasts are configured in `~/.podcasts.toml` as identifier to feed URL.
//! Resolving an identifier fetches its RSS (or Atom) feed, takes the
//! enclosure of the first item, and downloads it to
//! `<media_dir>/<podcast id>/<file name>`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use podcast_dl::{Config, PodcastDownloader};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::instance()?;
//!     let downloader = PodcastDownloader::new(config)?;
//!
//!     if let Some(target) = downloader.resolve_latest("someshow").await? {
//!         println!("Downloading {} at {}", target.file_name, target.path.display());
//!         downloader.download(&target).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types and the process-wide config instance
pub mod config;
/// Error types
pub mod error;
/// RSS/Atom feed parsing
pub mod feed;
/// HTTP fetching
pub mod fetcher;
/// Latest-episode resolution and download
pub mod podcast;
/// Utility functions
pub mod utils;

// Re-export commonly used types
pub use config::{Config, PodcastInfo};
pub use error::{Error, Result, ToExitCode};
pub use feed::{LatestEpisode, latest_episode_url, parse_latest_episode};
pub use fetcher::Fetcher;
pub use podcast::{DownloadTarget, PodcastDownloader};
