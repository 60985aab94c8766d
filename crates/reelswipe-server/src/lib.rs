//! Movies proxy server for reelswipe.
//!
//! Serves `GET /api/movies`, relaying page 1 of TMDb's popular movies while
//! keeping the API key on the server.

/// Proxy error type.
pub mod error;
/// Request handlers.
pub mod handler;
/// Router assembly.
pub mod server;
/// Shared application state.
pub mod state;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use reelswipe_api::tmdb::TmdbApi;

pub use server::build_router;
pub use state::AppState;

/// Binds `addr` and serves the proxy until Ctrl-C is received.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve<T>(addr: SocketAddr, state: AppState<T>) -> Result<()>
where
    T: TmdbApi + Send + Sync + 'static,
{
    if state.tmdb().is_none() {
        tracing::warn!(
            "{} is not set; {} will answer with HTTP 500",
            state::API_KEY_ENV,
            server::MOVIES_PATH
        );
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Serving HTTP on {}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
