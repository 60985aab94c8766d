//! Config directory resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// File name of the swipe TUI log.
const SWIPE_LOG_FILE: &str = "swipe.log";

/// Resolves the directory holding reelswipe's files.
///
/// - If `dir` is `Some`, returns it as-is.
/// - Otherwise returns `~/.config/reelswipe`.
fn resolve_base_dir(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.clone());
    }

    let home = std::env::var("HOME").context("HOME environment variable is not set")?;
    Ok(PathBuf::from(home).join(".config").join("reelswipe"))
}

/// Resolves the config file path.
///
/// - If `dir` is `Some`, returns `{dir}/config.toml`.
/// - Otherwise returns `~/.config/reelswipe/config.toml`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    Ok(resolve_base_dir(dir)?.join("config.toml"))
}

/// Resolves the log file written while the swipe TUI owns the terminal.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined (when `dir` is `None`).
pub fn resolve_log_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    Ok(resolve_base_dir(dir)?.join(SWIPE_LOG_FILE))
}
