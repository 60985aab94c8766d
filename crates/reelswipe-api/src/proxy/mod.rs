//! Movies proxy client module.
//!
//! Calls the reelswipe server's `/api/movies` endpoint, which relays
//! TMDb's popular movies without exposing the API key to the client.

mod api;
mod client;

pub use api::{LocalMovieFeed, MovieFeed};
#[allow(clippy::module_name_repetitions)]
pub use client::{ProxyClient, ProxyClientBuilder};
