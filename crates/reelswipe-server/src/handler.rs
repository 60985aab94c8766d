//! `/api/movies` request handler.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use reelswipe_api::tmdb::TmdbApi;

use crate::error::ProxyError;
use crate::state::AppState;

/// Locale requested from TMDb.
pub const POPULAR_LANGUAGE: &str = "en-US";

/// The only page ever requested.
pub const POPULAR_PAGE: u32 = 1;

/// Relays page 1 of TMDb's popular movies.
///
/// The upstream JSON is returned byte for byte with `200`. Every failure maps to
/// a `500` with a fixed message; the cause is logged here and nowhere else.
///
/// # Errors
///
/// - [`ProxyError::MissingApiKey`] when no key is configured (TMDb is not called).
/// - [`ProxyError::Upstream`] when the TMDb call fails for any reason.
pub async fn popular_movies<T>(
    State(state): State<AppState<T>>,
) -> Result<Response, ProxyError>
where
    T: TmdbApi + Send + Sync + 'static,
{
    let tmdb = state.tmdb().ok_or(ProxyError::MissingApiKey)?;

    match tmdb.popular_movies(POPULAR_LANGUAGE, POPULAR_PAGE).await {
        Ok(body) => Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response()),
        Err(err) => {
            tracing::error!("Error fetching movies: {err:#}");
            Err(ProxyError::Upstream(err))
        }
    }
}
