//! `ProxyClient` - client for the reelswipe movies proxy.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::MovieFeed;
use crate::movie::{Movie, MoviesPayload};

/// Default proxy base URL (matches the server's default listen address).
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/";

/// Path of the movies endpoint, relative to the base URL.
const MOVIES_PATH: &str = "api/movies";

/// Movies proxy client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ProxyClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL of the proxy server.
    base_url: Url,
}

/// Builder for `ProxyClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct ProxyClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl ProxyClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the proxy base URL (default: `http://127.0.0.1:3000/`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(crate::with_trailing_slash(url));
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
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<ProxyClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            Url::parse(DEFAULT_BASE_URL).context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(ProxyClient {
            http_client,
            base_url,
        })
    }
}

impl ProxyClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> ProxyClientBuilder {
        ProxyClientBuilder::new()
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl MovieFeed for ProxyClient {
    #[instrument(skip_all)]
    async fn fetch_movies(&self) -> Result<Vec<Movie>> {
        let url = self
            .base_url
            .join(MOVIES_PATH)
            .with_context(|| format!("failed to join URL path: {MOVIES_PATH}"))?;

        tracing::debug!(url = %url, "movies proxy request");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .context("request to movies proxy failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("HTTP error! status: {}", status.as_u16());
        }

        let payload: MoviesPayload = response
            .json()
            .await
            .context("failed to decode movies proxy response")?;
        Ok(payload.results)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    fn client_for(mock_server: &wiremock::MockServer) -> ProxyClient {
        ProxyClient::builder()
            .base_url(format!("{}/", mock_server.uri()).parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_user_agent() {
        // Arrange & Act
        let result = ProxyClient::builder().build();

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("user_agent is required")
        );
    }

    #[test]
    fn test_builder_default_base_url() {
        // Arrange & Act
        let client = ProxyClient::builder()
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:3000/");
    }

    #[tokio::test]
    async fn test_fetch_movies_reads_results() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let body = include_str!("../../../../fixtures/tmdb/popular_movies_page1.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/api/movies"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let movies = client.fetch_movies().await.unwrap();

        // Assert
        assert_eq!(movies.len(), 3);
        assert_eq!(movies[1].title, "Puss in Boots: The Last Wish");
    }

    #[tokio::test]
    async fn test_base_url_without_trailing_slash_keeps_prefix() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/reelswipe/api/movies"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(r#"{"results":[]}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ProxyClient::builder()
            .base_url(format!("{}/reelswipe", mock_server.uri()).parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let movies = client.fetch_movies().await.unwrap();

        // Assert
        assert!(movies.is_empty());
        assert_eq!(client.base_url().path(), "/reelswipe/");
    }

    #[tokio::test]
    async fn test_fetch_movies_missing_results_is_empty() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/api/movies"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(r#"{"page":1}"#))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let movies = client.fetch_movies().await.unwrap();

        // Assert
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_movies_non_ok_status_is_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(500)
                    .set_body_string(r#"{"error":"Failed to fetch movies from TMDb API."}"#),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let result = client.fetch_movies().await;

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_fetch_movies_invalid_json_is_error() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let result = client.fetch_movies().await;

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("failed to decode movies proxy response")
        );
    }
}
