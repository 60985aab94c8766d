//! `TmdbClient` - TMDb API client implementation.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::de::IgnoredAny;
use tracing::instrument;
use url::Url;

use super::api::TmdbApi;
use super::types::TmdbErrorResponse;

/// Default base URL for TMDb API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// TMDb API client.
///
/// Authenticates with the v3 `api_key` query parameter.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// v3 API key.
    api_key: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (default: `https://api.themoviedb.org/3/`).
    ///
    /// A trailing `/` is added when missing.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(crate::with_trailing_slash(url));
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let api_key = self.api_key.context("api_key is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Sends a GET request with the API key and query params and returns the
    /// JSON body as received.
    ///
    /// Makes exactly one attempt; non-2xx responses and bodies that are not
    /// valid JSON become errors.
    #[instrument(skip_all)]
    async fn get_json_text(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("failed to join URL path: {path}"))?;

        let request = self
            .http_client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .build()
            .with_context(|| format!("failed to build request: {path}"))?;

        // The full URL carries the key, so only the path is logged.
        tracing::debug!(path, "TMDb API request");

        let result = self.http_client.execute(request).await;
        let response = result.with_context(|| format!("request failed: {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            if let Ok(error_response) = serde_json::from_str::<TmdbErrorResponse>(&body) {
                bail!(
                    "TMDb API error (HTTP {}): code={}, message={}",
                    status,
                    error_response.status_code,
                    error_response.status_message,
                );
            }
            bail!("TMDb API error (HTTP {status}): {body}");
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body: {path}"))?;
        serde_json::from_str::<IgnoredAny>(&body)
            .with_context(|| format!("failed to decode JSON response: {path}"))?;
        Ok(body)
    }
}

impl TmdbApi for TmdbClient {
    #[instrument(skip_all)]
    async fn popular_movies(&self, language: &str, page: u32) -> Result<String> {
        let query = [
            ("language", String::from(language)),
            ("page", page.to_string()),
        ];
        self.get_json_text("movie/popular", &query).await
    }
}
