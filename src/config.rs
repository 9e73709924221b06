//! Configuration types for podcast-dl
//!
//! The configuration lives in `~/.podcasts.toml`:
//!
//! ```toml
//! [config]
//! media_dir = "/home/me/podcasts"
//!
//! [podcasts]
//! someshow = "https://example.com/feed.xml"
//! ```
//!
//! It is read once per process and cached; see [`Config::instance`].

use crate::error::{Error, Result};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the configuration file inside the user's home directory
pub const CONFIG_FILE_NAME: &str = ".podcasts.toml";

static INSTANCE: OnceCell<Config> = OnceCell::new();

/// General settings from the `[config]` table
#[derive(Clone, Debug, Deserialize)]
pub struct GeneralConfig {
    /// Root directory holding one subdirectory per podcast
    pub media_dir: PathBuf,
}

/// Main configuration
///
/// Mirrors the file layout: the `[config]` table is [`GeneralConfig`] and the
/// `[podcasts]` table maps podcast identifiers to feed URLs. Both tables are
/// required.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// General settings (`[config]`)
    pub config: GeneralConfig,

    /// Podcast identifier to feed URL (`[podcasts]`)
    pub podcasts: BTreeMap<String, String>,
}

/// Where a podcast's feed lives and where its episodes go
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PodcastInfo {
    /// Feed URL exactly as configured
    pub feed_url: String,
    /// `media_dir/<podcast id>`
    pub download_dir: PathBuf,
}

impl Config {
    /// Get the media root directory
    pub fn media_dir(&self) -> &Path {
        &self.config.media_dir
    }

    /// Path of the configuration file: `$HOME/.podcasts.toml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| Error::Config {
            message: "cannot determine the home directory".to_string(),
            key: None,
        })?;
        Ok(home.join(CONFIG_FILE_NAME))
    }

    /// Process-wide configuration, loaded from [`Config::default_path`] on
    /// first access
    ///
    /// Later calls return the cached value without touching the filesystem.
    /// A failed load is not cached, so the next call retries.
    pub fn instance() -> Result<&'static Config> {
        load_once(&INSTANCE, || Self::load(&Self::default_path()?))
    }

    /// Read and validate a configuration file
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the file is missing or unreadable, is not
    /// valid TOML, lacks a required table or key, or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading configuration");

        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("cannot read {}: {}", path.display(), e),
            key: None,
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
            message: e.to_string(),
            key: None,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values that deserialization alone cannot
    fn validate(&self) -> Result<()> {
        if self.config.media_dir.as_os_str().is_empty() {
            return Err(Error::config("media_dir must not be empty", "config.media_dir"));
        }

        for (id, feed_url) in &self.podcasts {
            let key = format!("podcasts.{id}");
            // The id becomes a single directory name under media_dir
            if matches!(id.as_str(), "" | "." | "..") || id.chars().any(std::path::is_separator) {
                return Err(Error::config(
                    format!("podcast id '{id}' must be a plain directory name"),
                    key,
                ));
            }
            let parsed = url::Url::parse(feed_url)
                .map_err(|e| Error::config(format!("invalid feed URL '{feed_url}': {e}"), &key))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::config(
                    format!("feed URL '{feed_url}' must use http or https"),
                    key,
                ));
            }
        }

        Ok(())
    }

    /// Look up a podcast's feed URL and download directory
    ///
    /// # Errors
    /// Returns [`Error::UnknownPodcast`] if `podcast_id` is not configured.
    pub fn podcast_info(&self, podcast_id: &str) -> Result<PodcastInfo> {
        let feed_url = self
            .podcasts
            .get(podcast_id)
            .ok_or_else(|| Error::UnknownPodcast(podcast_id.to_string()))?;

        Ok(PodcastInfo {
            feed_url: feed_url.clone(),
            download_dir: self.config.media_dir.join(podcast_id),
        })
    }
}

fn load_once<F>(cell: &OnceCell<Config>, load: F) -> Result<&Config>
where
    F: FnOnce() -> Result<Config>,
{
    cell.get_or_try_init(load)
}
