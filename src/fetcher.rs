//! HTTP fetching for feeds and episode files
//!
//! Redirects are followed (reqwest's default policy). Response status codes
//! are not inspected: whatever body the server sends is returned or written.
//! Only transport failures are errors.

use crate::error::{Error, Result};
use futures::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// User agent sent with every request
const USER_AGENT: &str = concat!("podcast-dl/", env!("CARGO_PKG_VERSION"));

/// Blocking-style HTTP GET helper over a shared reqwest client
#[derive(Clone, Debug)]
pub struct Fetcher {
    http_client: reqwest::Client,
}

impl Fetcher {
    /// Create a new fetcher
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// GET `url` and return the body as text
    ///
    /// # Errors
    /// Returns [`Error::Network`] if the request or the body read fails.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self.http_client.get(url).send().await?;
        debug!(status = %response.status(), "Response received from {}", url);

        Ok(response.text().await?)
    }

    /// GET `url` and stream the body into the file at `path`
    ///
    /// The file is created (or truncated) before the request is sent. Returns
    /// the number of bytes written.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be opened or written, and
    /// [`Error::Network`] if the request or the body stream fails. A failed
    /// transfer may leave a partial file behind.
    pub async fn download_to_file(&self, url: &str, path: &Path) -> Result<u64> {
        let mut file = tokio::fs::File::create(path).await?;

        debug!("Downloading {} to {}", url, path.display());
        let response = self.http_client.get(url).send().await?;
        debug!(status = %response.status(), "Response received from {}", url);

        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;

        info!("Wrote {} bytes to {}", written, path.display());
        Ok(written)
    }
}
