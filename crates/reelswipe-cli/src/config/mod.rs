//! Application configuration module.
//!
//! Manages the TOML config file holding the server listen address,
//! the proxy URL used by the swipe TUI and an optional TMDb base URL.
//! The TMDb API key is never stored here; it comes from `TMDB_API_KEY`.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::AppConfig;
pub use paths::{resolve_config_path, resolve_log_path};
