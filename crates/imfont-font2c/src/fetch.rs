//! Download of the converter binary.
#![allow(clippy::future_not_send)]

use std::path::Path;

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::paths::is_available;

/// Default download location of the converter binary.
const DEFAULT_DOWNLOAD_URL: &str = "https://github.com/hk4crprasad/hk4crprasad/raw/master/font2c";

/// Permission bits applied to the downloaded binary.
#[cfg(unix)]
const EXECUTABLE_MODE: u32 = 0o755;

/// Installs the converter binary at a given path.
///
/// Abstracts the download for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(BinaryFetcher: Send)]
pub trait LocalBinaryFetcher {
    /// Places an executable converter at `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the download or the file write fails.
    async fn fetch(&self, dest: &Path) -> Result<()>;
}

/// HTTP downloader for the converter binary.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct Font2cFetcher {
    /// HTTP client.
    http_client: Client,
    /// Binary download URL.
    url: Url,
}

/// Builder for `Font2cFetcher`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct Font2cFetcherBuilder {
    url: Option<Url>,
    user_agent: Option<String>,
}

impl Font2cFetcherBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            url: None,
            user_agent: None,
        }
    }

    /// Overrides the download URL (for wiremock in tests).
    #[must_use]
    pub fn url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the fetcher.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<Font2cFetcher> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let url = if let Some(url) = self.url {
            url
        } else {
            Url::parse(DEFAULT_DOWNLOAD_URL).context("invalid default download URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Font2cFetcher { http_client, url })
    }
}

impl Font2cFetcher {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> Font2cFetcherBuilder {
        Font2cFetcherBuilder::new()
    }

    /// Download URL in use.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl BinaryFetcher for Font2cFetcher {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn fetch(&self, dest: &Path) -> Result<()> {
        tracing::debug!(dest = %dest.display(), "Downloading converter");

        let response = self
            .http_client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("request failed: {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("font2c download failed (HTTP {status}): {}", self.url);
        }

        let body = response
            .bytes()
            .await
            .with_context(|| format!("failed to read response body: {}", self.url))?;

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(dest, &body)
            .with_context(|| format!("failed to write {}", dest.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(dest, std::fs::Permissions::from_mode(EXECUTABLE_MODE))
                .with_context(|| format!("failed to mark {} executable", dest.display()))?;
        }

        tracing::debug!(bytes = body.len(), "Converter downloaded");
        Ok(())
    }
}

/// Makes sure an executable converter exists at `path`, fetching it if needed.
///
/// Returns `true` when a download happened.
///
/// # Errors
///
/// Returns an error if the fetch fails or the fetched file is still not
/// executable.
pub async fn ensure_available(
    path: &Path,
    fetcher: &(impl BinaryFetcher + Sync),
) -> Result<bool> {
    if is_available(path) {
        return Ok(false);
    }

    tracing::info!("font2c not found. Downloading...");
    BinaryFetcher::fetch(fetcher, path)
        .await
        .context("font2c is not available and could not be downloaded")?;

    if !is_available(path) {
        bail!("font2c at {} is not executable after download", path.display());
    }
    tracing::info!("font2c downloaded and made executable.");
    Ok(true)
}
