//! Router assembly.

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use reelswipe_api::tmdb::TmdbApi;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Path served by the movies proxy.
pub const MOVIES_PATH: &str = "/api/movies";

/// Builds the application router.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TmdbApi + Send + Sync + 'static,
{
    Router::new()
        .route(MOVIES_PATH, get(handler::popular_movies::<T>))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback_handler(req: Request) -> impl IntoResponse {
    tracing::debug!(path = %req.uri().path(), "no route");
    StatusCode::NOT_FOUND
}
