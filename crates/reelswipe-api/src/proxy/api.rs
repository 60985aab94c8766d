//! `MovieFeed` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use crate::movie::Movie;

/// Source of the movie list shown to the user.
///
/// Uses `trait_variant::make` to generate a `Send`-bound async trait so the
/// fetch can run on a spawned task.
#[trait_variant::make(MovieFeed: Send)]
pub trait LocalMovieFeed {
    /// Fetches the movie list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success,
    /// or the body cannot be decoded.
    async fn fetch_movies(&self) -> Result<Vec<Movie>>;
}
