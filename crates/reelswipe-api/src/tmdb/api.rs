//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

/// TMDb API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches one page of popular movies as raw JSON text.
    ///
    /// The body is checked to be JSON and otherwise returned byte for byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the upstream status is
    /// not a success, or the body is not valid JSON.
    async fn popular_movies(&self, language: &str, page: u32) -> Result<String>;
}
