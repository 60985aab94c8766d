//! `AppConfig` struct and TOML read/write.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Proxy server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Swipe TUI settings.
    #[serde(default)]
    pub client: ClientConfig,
    /// Upstream TMDb settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// Proxy server configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_address")]
    pub address: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Parses `address:port` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns an error if `address` is not a valid IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .address
            .parse()
            .with_context(|| format!("invalid listen address: {}", self.address))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Swipe TUI configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the reelswipe proxy server.
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            proxy_url: default_proxy_url(),
        }
    }
}

impl ClientConfig {
    /// Parses `proxy_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn proxy_url(&self) -> Result<Url> {
        Url::parse(&self.proxy_url)
            .with_context(|| format!("invalid proxy URL: {}", self.proxy_url))
    }
}

/// Upstream TMDb configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TmdbConfig {
    /// Overrides the TMDb API base URL (default: `https://api.themoviedb.org/3/`).
    #[serde(default)]
    pub base_url: Option<String>,
}

impl TmdbConfig {
    /// Parses `base_url`, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn base_url(&self) -> Result<Option<Url>> {
        self.base_url
            .as_deref()
            .map(|raw| Url::parse(raw).with_context(|| format!("invalid TMDb base URL: {raw}")))
            .transpose()
    }
}

fn default_address() -> String {
    String::from("127.0.0.1")
}

const fn default_port() -> u16 {
    3000
}

fn default_proxy_url() -> String {
    String::from("http://127.0.0.1:3000/")
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
