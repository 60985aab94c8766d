//! Shared, read-only state handed to every request.

use std::sync::Arc;

use anyhow::{Context, Result};
use reelswipe_api::tmdb::TmdbClient;
use url::Url;

/// Environment variable holding the TMDb v3 API key.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Application state.
///
/// `tmdb` is `None` when no API key was configured at startup; requests then
/// fail without contacting TMDb.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct AppState<T> {
    tmdb: Option<Arc<T>>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            tmdb: self.tmdb.clone(),
        }
    }
}

impl<T> AppState<T> {
    /// Creates state around an optional upstream client.
    #[must_use]
    pub fn new(tmdb: Option<T>) -> Self {
        Self {
            tmdb: tmdb.map(Arc::new),
        }
    }

    /// Returns the upstream client, if an API key is configured.
    #[must_use]
    pub fn tmdb(&self) -> Option<&T> {
        self.tmdb.as_deref()
    }
}

impl AppState<TmdbClient> {
    /// Builds state for the real TMDb client.
    ///
    /// An absent or empty `api_key` yields state without a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_api_key(api_key: Option<String>, base_url: Option<Url>) -> Result<Self> {
        let Some(api_key) = api_key.filter(|key| !key.is_empty()) else {
            return Ok(Self::new(None));
        };

        let mut builder = TmdbClient::builder().api_key(api_key).user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(url) = base_url {
            builder = builder.base_url(url);
        }
        let client = builder.build().context("failed to build TMDb client")?;
        Ok(Self::new(Some(client)))
    }

    /// Builds state from the `TMDB_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_env(base_url: Option<Url>) -> Result<Self> {
        Self::with_api_key(std::env::var(API_KEY_ENV).ok(), base_url)
    }
}
