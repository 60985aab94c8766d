//! reelswipe - swipe through TMDb's popular movies.

/// Application configuration (TOML).
mod config;
/// Terminal UI components.
mod tui;

use std::fs::File;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{AppConfig, resolve_config_path, resolve_log_path};
use crate::tui::run_swipe_deck;
use reelswipe_api::proxy::ProxyClient;
use reelswipe_api::tmdb::{TmdbApi, TmdbClient, TmdbPopularMoviesResponse};
use reelswipe_server::AppState;
use reelswipe_server::handler::{POPULAR_LANGUAGE, POPULAR_PAGE};
use reelswipe_server::state::API_KEY_ENV;

/// User-Agent sent by every client this binary builds.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config/data directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run the movies proxy server.
    Serve(ServeArgs),
    /// Swipe through popular movies in the terminal.
    Swipe(SwipeArgs),
    /// Query TMDb API directly.
    Tmdb(TmdbCommand),
    /// Manage the config file.
    Config(ConfigCommand),
}

/// Arguments for the `serve` subcommand.
#[derive(clap::Args)]
struct ServeArgs {
    /// Listen address (default: config `server.address`).
    #[arg(long)]
    address: Option<IpAddr>,
    /// Listen port (default: config `server.port`).
    #[arg(long)]
    port: Option<u16>,
}

/// Arguments for the `swipe` subcommand.
#[derive(clap::Args)]
struct SwipeArgs {
    /// Proxy server base URL (default: config `client.proxy_url`).
    #[arg(long)]
    proxy_url: Option<Url>,
}

/// Arguments for the `tmdb` subcommand.
#[derive(clap::Args)]
struct TmdbCommand {
    /// TMDb subcommand to run.
    #[command(subcommand)]
    command: TmdbSubcommands,
}

/// Available TMDb subcommands.
#[derive(Subcommand)]
enum TmdbSubcommands {
    /// List page 1 of popular movies.
    Popular,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Write a default config file if none exists.
    Init,
    /// Show the effective configuration.
    Show,
}

/// Loads `config.toml` from `dir` (or the default location).
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let path = resolve_config_path(dir)?;
    AppConfig::load(&path)
}

/// Runs the `serve` subcommand.
///
/// # Errors
///
/// Returns an error if the config is invalid, the listen address cannot be
/// bound, or the server fails.
#[instrument(skip_all)]
async fn run_serve(args: &ServeArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;

    let mut addr = config.server.socket_addr()?;
    if let Some(ip) = args.address {
        addr.set_ip(ip);
    }
    if let Some(port) = args.port {
        addr.set_port(port);
    }

    let state = AppState::from_env(config.tmdb.base_url()?)?;
    reelswipe_server::serve(addr, state).await
}

/// Runs the `swipe` subcommand.
///
/// The TUI loop blocks, so it runs on a blocking thread while the runtime
/// drives the movie fetch.
///
/// # Errors
///
/// Returns an error if the config is invalid, the client fails to build, or
/// the TUI fails.
#[instrument(skip_all)]
async fn run_swipe(args: SwipeArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let proxy_url = match args.proxy_url {
        Some(url) => url,
        None => config.client.proxy_url()?,
    };
    tracing::info!("Using movies proxy at {proxy_url}");

    let feed = ProxyClient::builder()
        .base_url(proxy_url)
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build proxy client")?;

    let handle = tokio::runtime::Handle::current();
    tokio::task::spawn_blocking(move || run_swipe_deck(&handle, feed))
        .await
        .context("swipe TUI thread panicked")?
}

/// Builds a TMDb client from the `TMDB_API_KEY` environment variable.
///
/// # Errors
///
/// Returns an error if `TMDB_API_KEY` is not set or the client fails to build.
fn build_tmdb_client(base_url: Option<Url>) -> Result<TmdbClient> {
    let api_key = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .with_context(|| format!("{API_KEY_ENV} environment variable is required"))?;

    let mut builder = TmdbClient::builder().api_key(api_key).user_agent(USER_AGENT);
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    builder.build().context("failed to build TMDb client")
}

/// Runs the `tmdb popular` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDb client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_tmdb_popular(dir: Option<&PathBuf>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(config.tmdb.base_url()?)?;

    let body = client
        .popular_movies(POPULAR_LANGUAGE, POPULAR_PAGE)
        .await
        .context("TMDb movie/popular request failed")?;
    let response: TmdbPopularMoviesResponse =
        serde_json::from_str(&body).context("unexpected movie/popular response shape")?;

    tracing::info!(
        "Page {} of {} ({} movies)",
        response.page,
        response.total_pages,
        response.total_results
    );
    tracing::info!("ID\t\tTitle\t\t\tPoster");
    for movie in &response.results {
        tracing::info!(
            "{}\t\t{}\t\t{}",
            movie.id,
            movie.title,
            movie.poster_url().as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}

/// Runs the `config init` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or written.
fn run_config_init(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;
    if path.exists() {
        tracing::info!("Config already exists: {}", path.display());
        return Ok(());
    }
    AppConfig::default().save(&path)?;
    tracing::info!("Wrote default config: {}", path.display());
    Ok(())
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or serialized.
fn run_config_show(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;
    let config = AppConfig::load(&path)?;
    let rendered = toml::to_string_pretty(&config).context("failed to serialize config")?;

    tracing::info!("# {}", path.display());
    for line in rendered.lines() {
        tracing::info!("{line}");
    }
    Ok(())
}

/// Opens the log file used while the swipe TUI owns the terminal.
fn open_log_file(dir: Option<&PathBuf>) -> Result<File> {
    let path = resolve_log_path(dir)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// Installs the global tracing subscriber.
///
/// Output goes to stdout, or to `log_file` when one is given.
fn init_tracing(log_file: Option<File>) {
    let ansi = log_file.is_none();
    let writer = log_file.map_or_else(
        || BoxMakeWriter::new(std::io::stdout),
        |file| BoxMakeWriter::new(Mutex::new(file)),
    );

    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(writer)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(writer);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match cli.command {
        Commands::Swipe(_) => Some(open_log_file(cli.dir.as_ref())?),
        Commands::Serve(_) | Commands::Tmdb(_) | Commands::Config(_) => None,
    };
    init_tracing(log_file);

    match cli.command {
        Commands::Serve(args) => run_serve(&args, cli.dir.as_ref()).await,
        Commands::Swipe(args) => run_swipe(args, cli.dir.as_ref()).await,
        Commands::Tmdb(tmdb) => match tmdb.command {
            TmdbSubcommands::Popular => run_tmdb_popular(cli.dir.as_ref()).await,
        },
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::Init => run_config_init(cli.dir.as_ref()),
            ConfigSubcommands::Show => run_config_show(cli.dir.as_ref()),
        },
    }
}
