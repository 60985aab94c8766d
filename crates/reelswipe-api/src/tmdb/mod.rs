//! TMDb API client module.
//!
//! Handles HTTP requests to the TMDb API v3 `movie/popular` endpoint.

mod api;
mod client;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{TmdbErrorResponse, TmdbPopularMoviesResponse};
