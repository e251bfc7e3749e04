//! `cwa-load`: load the fetched forecast file into the SQLite snapshot table.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use cwa_load::LoadConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Load the CWA forecast file into SQLite")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "cwa.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("CWA"))
    .build()
    .context("failed to read config file")?;

  let load_cfg: LoadConfig = settings
    .try_deserialize()
    .context("failed to deserialise LoadConfig")?;

  let summary = cwa_load::run(&load_cfg).await.with_context(|| {
    format!(
      "failed to load {} into {}",
      load_cfg.json_path.display(),
      load_cfg.store_path.display()
    )
  })?;

  println!(
    "stored {} locations in {}",
    summary.inserted,
    load_cfg.store_path.display()
  );
  Ok(())
}
