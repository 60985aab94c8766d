//! TMDb API response types.

use serde::Deserialize;

use crate::movie::Movie;

/// Response from the `movie/popular` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPopularMoviesResponse {
    /// Current page number.
    pub page: u32,
    /// Movies on this page.
    #[serde(default)]
    pub results: Vec<Movie>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

/// Error body returned by TMDb on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDb error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}
