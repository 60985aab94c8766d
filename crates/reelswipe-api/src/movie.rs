//! `Movie` and the `{ results: [...] }` payload returned by the proxy.

use serde::{Deserialize, Serialize};

/// Base URL that poster paths are appended to.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// A single movie as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// TMDb movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Poster image path relative to [`POSTER_BASE_URL`] (e.g. `/abc.jpg`).
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Movie {
    /// Returns the displayable poster URL, if the movie has a poster.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{POSTER_BASE_URL}{path}"))
    }
}

/// Body of a successful `/api/movies` response.
///
/// Only `results` is read; every other upstream field is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviesPayload {
    /// Movies on the page (empty when the field is absent).
    #[serde(default)]
    pub results: Vec<Movie>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_poster_url_joins_base() {
        // Arrange
        let movie = Movie {
            id: 1,
            title: String::from("A"),
            poster_path: Some(String::from("/a.jpg")),
        };

        // Act & Assert
        assert_eq!(
            movie.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/a.jpg")
        );
    }

    #[test]
    fn test_poster_url_none_without_path() {
        // Arrange
        let json = r#"{"id":2,"title":"B","poster_path":null}"#;

        // Act
        let movie: Movie = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(movie.poster_url(), None);
    }

    #[test]
    fn test_payload_defaults_to_empty_results() {
        // Arrange & Act
        let payload: MoviesPayload = serde_json::from_str(r#"{"page":1}"#).unwrap();

        // Assert
        assert!(payload.results.is_empty());
    }

    #[test]
    fn test_payload_ignores_extra_fields() {
        // Arrange
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 1, "title": "A", "poster_path": "/a.jpg", "adult": false, "vote_average": 7.1}
            ],
            "total_pages": 500
        }"#;

        // Act
        let payload: MoviesPayload = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(payload.results.len(), 1);
        assert_eq!(payload.results[0].title, "A");
    }
}
