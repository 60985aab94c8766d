//! Swipe deck state management.

use anyhow::Result;
use reelswipe_api::movie::Movie;

/// Message shown while the movie list is being fetched.
pub const LOADING_MESSAGE: &str = "Loading movies...";

/// Message shown when the movie list could not be fetched.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load movies. Please try again later.";

/// Message shown when the fetch succeeded with no movies.
pub const EMPTY_MESSAGE: &str = "No movies available.";

/// User intent for the current movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    /// Swipe right or the "Like" control.
    Like,
    /// Swipe left or the "Dislike" control.
    Dislike,
}

impl SwipeAction {
    /// Verb used in the action log line.
    const fn past_tense(self) -> &'static str {
        match self {
            Self::Like => "Liked",
            Self::Dislike => "Disliked",
        }
    }
}

/// Outcome of the mount-time fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch in flight.
    Loading,
    /// Fetch failed; holds the user-facing message.
    Failed(String),
    /// Fetch succeeded (the list may be empty).
    Loaded,
}

/// What the deck renders, derived from the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckView<'a> {
    /// Loading indicator only.
    Loading,
    /// Error message.
    Error(&'a str),
    /// The movie under the cursor.
    Movie(&'a Movie),
    /// Loaded, but there is nothing to show.
    Empty,
}

/// State for the swipe deck TUI.
///
/// The cursor only moves forward and never passes the last movie.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SwipeDeckState {
    /// Fetch outcome.
    load: LoadState,
    /// Movies in display order.
    movies: Vec<Movie>,
    /// Index of the movie being shown.
    cursor: usize,
}

impl Default for SwipeDeckState {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeDeckState {
    /// Creates a deck that is waiting for its movies.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            load: LoadState::Loading,
            movies: Vec::new(),
            cursor: 0,
        }
    }

    /// Marks the fetch as started, clearing any previous error.
    pub fn begin_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Applies the fetch outcome and leaves the loading state.
    pub fn finish_loading(&mut self, result: Result<Vec<Movie>>) {
        match result {
            Ok(movies) => {
                tracing::debug!(count = movies.len(), "movies loaded");
                self.movies = movies;
                self.cursor = 0;
                self.load = LoadState::Loaded;
            }
            Err(err) => {
                tracing::error!("Error fetching movies: {err:#}");
                self.load = LoadState::Failed(String::from(LOAD_ERROR_MESSAGE));
            }
        }
    }

    /// Returns `true` while the fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Returns the loaded movies.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Returns the cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the movie under the cursor.
    #[must_use]
    pub fn current_movie(&self) -> Option<&Movie> {
        self.movies.get(self.cursor)
    }

    /// Derives what should be rendered.
    #[must_use]
    pub fn view(&self) -> DeckView<'_> {
        match &self.load {
            LoadState::Loading => DeckView::Loading,
            LoadState::Failed(message) => DeckView::Error(message),
            LoadState::Loaded => self
                .current_movie()
                .map_or(DeckView::Empty, DeckView::Movie),
        }
    }

    /// Records the user's intent for the current movie, then moves on.
    ///
    /// The only effect besides advancing is a log line; nothing is sent or stored.
    pub fn handle_action(&mut self, action: SwipeAction) {
        if let Some(movie) = self.current_movie() {
            tracing::info!("{}: {}", action.past_tense(), movie.title);
        }
        self.advance();
    }

    /// Moves to the next movie. Returns `false` once the list is exhausted.
    pub fn advance(&mut self) -> bool {
        let next = self.cursor.saturating_add(1);
        if next < self.movies.len() {
            self.cursor = next;
            true
        } else {
            tracing::info!("No more movies to display.");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};

    use super::*;

    fn movie(id: u64, title: &str, poster_path: &str) -> Movie {
        Movie {
            id,
            title: String::from(title),
            poster_path: Some(String::from(poster_path)),
        }
    }

    fn loaded(movies: Vec<Movie>) -> SwipeDeckState {
        let mut state = SwipeDeckState::new();
        state.finish_loading(Ok(movies));
        state
    }

    fn two_movies() -> SwipeDeckState {
        loaded(vec![movie(1, "A", "/a.jpg"), movie(2, "B", "/b.jpg")])
    }

    #[test]
    fn test_initial_state_is_loading() {
        // Arrange & Act
        let state = SwipeDeckState::new();

        // Assert
        assert!(state.is_loading());
        assert_eq!(state.view(), DeckView::Loading);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_loaded_shows_first_movie() {
        // Arrange & Act
        let state = two_movies();

        // Assert
        assert!(!state.is_loading());
        assert!(matches!(state.view(), DeckView::Movie(m) if m.title == "A"));
    }

    #[test]
    fn test_action_advances_then_stops_at_last() {
        // Arrange
        let mut state = two_movies();
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("Liked: A")))
            .event(expect::event().with_fields(expect::msg("Disliked: B")))
            .event(expect::event().with_fields(expect::msg("No more movies to display.")))
            .only()
            .run_with_handle();

        // Act & Assert
        with_default(subscriber, || {
            state.handle_action(SwipeAction::Like);
            assert!(matches!(state.view(), DeckView::Movie(m) if m.title == "B"));

            state.handle_action(SwipeAction::Dislike);
            assert!(matches!(state.view(), DeckView::Movie(m) if m.title == "B"));
        });

        handle.assert_finished();
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_exactly_len_minus_one_advances() {
        // Arrange
        let mut state = loaded(
            (1..=5)
                .map(|id| movie(id, &format!("M{id}"), "/p.jpg"))
                .collect(),
        );

        // Act
        let advanced = (0..10).filter(|_| state.advance()).count();

        // Assert
        assert_eq!(advanced, 4);
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn test_advance_on_empty_list_logs_and_stays() {
        // Arrange
        let mut state = loaded(Vec::new());
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("No more movies to display.")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            state.handle_action(SwipeAction::Like);
        });

        // Assert
        handle.assert_finished();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_empty_results_render_empty_not_error() {
        // Arrange & Act
        let state = loaded(Vec::new());

        // Assert
        assert_eq!(state.view(), DeckView::Empty);
    }

    #[test]
    fn test_failed_fetch_sets_fixed_message_and_logs_cause() {
        // Arrange
        let mut state = SwipeDeckState::new();
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().at_level(tracing::Level::ERROR))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            state.finish_loading(Err(anyhow::anyhow!("connection refused")));
        });

        // Assert
        handle.assert_finished();
        assert!(!state.is_loading());
        assert_eq!(state.view(), DeckView::Error(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn test_begin_loading_clears_error() {
        // Arrange
        let mut state = SwipeDeckState::new();
        state.finish_loading(Err(anyhow::anyhow!("boom")));

        // Act
        state.begin_loading();

        // Assert
        assert!(state.is_loading());
        assert_eq!(state.view(), DeckView::Loading);
    }
}
