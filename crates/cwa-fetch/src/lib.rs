//! Fetcher stage: download the CWA agricultural forecast document and store
//! it verbatim as pretty-printed JSON on local disk.
//!
//! The loader reads the file this crate writes; nothing else couples the two.

pub mod client;
pub mod error;
pub mod output;

pub use client::{ForecastClient, request_url};
pub use error::{Error, Result};
pub use output::write_document;

use std::path::PathBuf;

use serde::Deserialize;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Fetcher settings, deserialised from `cwa.toml` and `CWA_*` variables.
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
  #[serde(default = "default_base_url")]
  pub base_url:     String,
  #[serde(default = "default_dataset_id")]
  pub dataset_id:   String,
  /// Credential sent as the `Authorization` query parameter.
  pub api_key:      String,
  #[serde(default = "default_json_path")]
  pub json_path:    PathBuf,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

fn default_base_url() -> String {
  "https://opendata.cwa.gov.tw/fileapi/v1/opendataapi".to_string()
}

fn default_dataset_id() -> String { "F-A0010-001".to_string() }

fn default_json_path() -> PathBuf { PathBuf::from("cwa_weather_data.json") }

const fn default_timeout_secs() -> u64 { 30 }

impl Default for FetchConfig {
  fn default() -> Self {
    Self {
      base_url:     default_base_url(),
      dataset_id:   default_dataset_id(),
      api_key:      String::new(),
      json_path:    default_json_path(),
      timeout_secs: default_timeout_secs(),
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

/// Download the document and write it to `config.json_path`.
///
/// Returns the absolute path written. On any error nothing is written and an
/// existing output file is left as it was.
pub async fn run(config: &FetchConfig) -> Result<PathBuf> {
  let client = ForecastClient::new(config)?;
  let document = client.fetch().await?;
  let path = write_document(&document, &config.json_path).await?;
  tracing::info!(path = %path.display(), "saved forecast document");
  Ok(path)
}
