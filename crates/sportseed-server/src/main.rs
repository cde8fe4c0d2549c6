//! sportseed server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store named by the store credentials, and serves the collector API over
//! HTTP. A store that cannot be opened is logged and the server starts
//! anyway; ingest runs then report that the store is not initialized.
//!
//! # One-shot mode
//!
//! ```
//! cargo run -p sportseed-server --bin server -- --once
//! ```
//!
//! runs a single collection, prints the report as JSON and exits.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use sportseed_core::{ingest::IngestEngine, leagues::StaticLeagues};
use sportseed_server::{
  AppState, ServerConfig, credentials::StoreCredentials, handlers::collector,
};
use sportseed_source::WikipediaSource;
use sportseed_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "sportseed collector server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Run one collection, print the report and exit.
  #[arg(long)]
  once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config).context("failed to load configuration")?;

  let store = match open_store(&server_cfg).await {
    Ok(store) => {
      tracing::info!("store initialized at {}", store.namespace());
      Some(Arc::new(store))
    }
    Err(e) => {
      tracing::error!("error initializing store: {e:#}");
      None
    }
  };

  let source = WikipediaSource::new(server_cfg.source_url.clone())
    .context("failed to build HTTP client")?;
  tracing::info!("sports will be scraped from {}", source.url());
  let state = AppState::new(IngestEngine::new(store, StaticLeagues), source);

  if cli.once {
    let report = collector::run(&state).await.context("collection failed")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    return Ok(());
  }

  let app = sportseed_server::router(state);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

async fn open_store(cfg: &ServerConfig) -> anyhow::Result<SqliteStore> {
  let creds = StoreCredentials::load(&cfg.credentials_path)
    .context("failed to load store credentials")?;
  let path = expand_tilde(&creds.database_path);

  SqliteStore::open(&path, &cfg.namespace())
    .await
    .with_context(|| format!("failed to open store at {path:?}"))
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
