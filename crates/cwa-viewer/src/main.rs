//! `cwa-viewer`: serve the forecast table over HTTP.
//!
//! Reads `cwa.toml` (or the path specified with `--config`) and `CWA_*`
//! environment variables, then serves the page at `http://<host>:<port>/`.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use cwa_viewer::{AppState, ViewerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "CWA forecast table viewer")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "cwa.toml")]
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
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("CWA"))
    .build()
    .context("failed to read config file")?;

  let viewer_cfg: ViewerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ViewerConfig")?;

  let address = format!("{}:{}", viewer_cfg.host, viewer_cfg.port);
  tracing::info!(store = %viewer_cfg.store_path.display(), "reading forecasts from database");

  let state = AppState::new(viewer_cfg).context("failed to compile page templates")?;
  let app = cwa_viewer::router(state);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
