//! Latest-episode resolution and download
//!
//! [`PodcastDownloader`] ties the pipeline together: config lookup, feed
//! fetch, enclosure extraction, file name derivation and the episode
//! download. Resolution and download are separate steps so the caller can
//! report the target before the transfer starts.

use crate::config::Config;
use crate::error::Result;
use crate::feed::parse_latest_episode;
use crate::fetcher::Fetcher;
use crate::utils::episode_file_name;
use std::path::PathBuf;
use tracing::{debug, info};

/// Where the latest episode comes from and where it goes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadTarget {
    /// Enclosure URL of the latest episode
    pub url: String,

    /// File name derived from [`url`](Self::url)
    pub file_name: String,

    /// `media_dir/<podcast id>/<file_name>`
    pub path: PathBuf,
}

/// Resolves and downloads the latest episode of configured podcasts
pub struct PodcastDownloader<'a> {
    config: &'a Config,
    fetcher: Fetcher,
}

impl<'a> PodcastDownloader<'a> {
    /// Create a downloader with a fresh [`Fetcher`]
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self::with_fetcher(config, Fetcher::new()?))
    }

    /// Create a downloader around an existing fetcher
    pub fn with_fetcher(config: &'a Config, fetcher: Fetcher) -> Self {
        Self { config, fetcher }
    }

    /// Fetch the podcast's feed and work out the download target for its
    /// latest episode
    ///
    /// Returns `Ok(None)` when the feed's first item has no enclosure URL.
    ///
    /// # Errors
    /// - [`Error::UnknownPodcast`](crate::Error::UnknownPodcast) if the id is not configured
    /// - [`Error::Network`](crate::Error::Network) if the feed cannot be fetched
    /// - [`Error::Parse`](crate::Error::Parse) if the feed is not RSS or Atom
    /// - [`Error::InvalidEpisodeUrl`](crate::Error::InvalidEpisodeUrl) if no file name can be derived
    pub async fn resolve_latest(&self, podcast_id: &str) -> Result<Option<DownloadTarget>> {
        let info = self.config.podcast_info(podcast_id)?;
        debug!(podcast = podcast_id, feed = %info.feed_url, "Resolving latest episode");

        let feed = self.fetcher.fetch_text(&info.feed_url).await?;
        let episode = parse_latest_episode(&feed)?;

        if !episode.has_url() {
            return Ok(None);
        }

        let file_name = episode_file_name(&episode.url)?;
        let path = info.download_dir.join(&file_name);

        info!(
            podcast = podcast_id,
            title = episode.title.as_deref().unwrap_or(""),
            url = %episode.url,
            "Latest episode resolved"
        );

        Ok(Some(DownloadTarget {
            url: episode.url,
            file_name,
            path,
        }))
    }

    /// Download a resolved episode to its target path
    ///
    /// The podcast's directory must already exist. Returns the number of
    /// bytes written.
    pub async fn download(&self, target: &DownloadTarget) -> Result<u64> {
        self.fetcher.download_to_file(&target.url, &target.path).await
    }
}
