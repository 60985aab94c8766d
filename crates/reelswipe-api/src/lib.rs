//! API client library for reelswipe.
//!
//! Provides a client for the TMDb API and a client for the movies proxy
//! that sits in front of it.

/// Movie data shared by both clients.
pub mod movie;

/// Movies proxy client.
pub mod proxy;

/// TMDb API client.
pub mod tmdb;

use url::Url;

/// Appends `/` to the URL path if missing, so relative joins keep the last segment.
pub(crate) fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_with_trailing_slash_appends_once() {
        // Arrange
        let bare = Url::parse("https://api.themoviedb.org/3").unwrap();
        let slashed = Url::parse("https://api.themoviedb.org/3/").unwrap();

        // Act & Assert
        assert_eq!(
            with_trailing_slash(bare).as_str(),
            "https://api.themoviedb.org/3/"
        );
        assert_eq!(
            with_trailing_slash(slashed).as_str(),
            "https://api.themoviedb.org/3/"
        );
    }

    #[test]
    fn test_with_trailing_slash_keeps_join_segment() {
        // Arrange
        let base = with_trailing_slash(Url::parse("http://127.0.0.1:3000/reelswipe").unwrap());

        // Act
        let joined = base.join("api/movies").unwrap();

        // Assert
        assert_eq!(joined.as_str(), "http://127.0.0.1:3000/reelswipe/api/movies");
    }
}
