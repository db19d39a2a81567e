//! moodcheck-server binary.
//!
//! Reads `moodcheck-server.toml` (or the path given with `--config`), layers
//! `MOODCHECK_*` environment variables over it, and serves the placeholder
//! check-in endpoint over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use moodcheck_api::{CheckInJournal, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Placeholder endpoint for moodcheck check-ins")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "moodcheck-server.toml")]
  config: PathBuf,
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

  // Load configuration.
  let defaults = ServerConfig::default();
  let settings = config::Config::builder()
    .set_default("host", defaults.host)?
    .set_default("port", i64::from(defaults.port))?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("MOODCHECK"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let app = moodcheck_api::api_router(Arc::new(CheckInJournal::new()));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
