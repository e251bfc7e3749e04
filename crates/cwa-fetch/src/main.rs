//! `cwa-fetch`: download the forecast document to a local JSON file.
//!
//! Reads `cwa.toml` (or the path given with `--config`) and `CWA_*`
//! environment variables. The API key is required:
//!
//! ```text
//! CWA_API_KEY=CWA-XXXXXXXX cwa-fetch
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use cwa_fetch::FetchConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Download the CWA forecast document")]
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

  let fetch_cfg: FetchConfig = settings
    .try_deserialize()
    .context("failed to deserialise FetchConfig (is CWA_API_KEY set?)")?;

  let path = cwa_fetch::run(&fetch_cfg)
    .await
    .context("forecast download failed")?;

  println!("{}", path.display());
  Ok(())
}
