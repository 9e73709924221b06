//! Error types for podcast-dl
//!
//! Every stage of the pipeline reports through the single [`Error`] enum. All
//! errors are fatal to the binary; [`ToExitCode`] maps each variant to the
//! process exit status and a machine-readable code for diagnostics.

use thiserror::Error;

/// Result type alias for podcast-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for podcast-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "config.media_dir")
        key: Option<String>,
    },

    /// Podcast identifier is not a key of the `[podcasts]` table
    #[error("unknown podcast: {0}")]
    UnknownPodcast(String),

    /// Transport-level HTTP failure (connect, TLS, body read, redirect loop)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Feed could not be parsed as RSS or Atom
    #[error("parse error: {0}")]
    Parse(String),

    /// No usable file name could be derived from the episode URL
    #[error("cannot derive a file name from episode URL '{0}'")]
    InvalidEpisodeUrl(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a configuration error tied to a specific key
    pub(crate) fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}

/// Convert errors to process exit statuses
///
/// Codes follow the BSD `sysexits.h` conventions so wrapper scripts can tell
/// a broken config apart from a flaky network.
pub trait ToExitCode {
    /// Get the process exit status for this error
    fn exit_code(&self) -> u8;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToExitCode for Error {
    fn exit_code(&self) -> u8 {
        match self {
            // EX_CONFIG
            Error::Config { .. } | Error::UnknownPodcast(_) => 78,
            // EX_UNAVAILABLE
            Error::Network(_) => 69,
            // EX_DATAERR
            Error::Parse(_) | Error::InvalidEpisodeUrl(_) => 65,
            // EX_IOERR
            Error::Io(_) => 74,
            // EX_SOFTWARE
            Error::Other(_) => 70,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Config { .. } => "config_error",
            Error::UnknownPodcast(_) => "unknown_podcast",
            Error::Network(_) => "network_error",
            Error::Parse(_) => "parse_error",
            Error::InvalidEpisodeUrl(_) => "invalid_episode_url",
            Error::Io(_) => "io_error",
            Error::Other(_) => "internal_error",
        }
    }
}
