//! Loader stage: read the fetched forecast document, extract one
//! [`LocationRecord`](cwa_core::LocationRecord) per location, and replace the
//! contents of the `weather` table with them.
//!
//! Extraction finishes before the store is touched, so a malformed document
//! never reaches the database. Store failures roll back, so either way the
//! previous snapshot survives a failed run.

pub mod error;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use cwa_core::{LocationRecord, extract_records, store::ForecastStore};
use cwa_store_sqlite::SqliteStore;
use serde::Deserialize;
use serde_json::Value;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Loader settings, deserialised from `cwa.toml` and `CWA_*` variables.
#[derive(Debug, Deserialize, Clone)]
pub struct LoadConfig {
  #[serde(default = "default_json_path")]
  pub json_path: PathBuf,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_json_path() -> PathBuf { PathBuf::from("cwa_weather_data.json") }

fn default_store_path() -> PathBuf { PathBuf::from("CWA_data.db") }

impl Default for LoadConfig {
  fn default() -> Self {
    Self {
      json_path: default_json_path(),
      store_path: default_store_path(),
    }
  }
}

// ─── Pipeline ─────────────────────────────────────────────────────────────────

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
  pub extracted: usize,
  pub inserted:  usize,
}

/// Read and parse the JSON document at `path`.
pub async fn read_document(path: &Path) -> Result<Value> {
  let bytes = tokio::fs::read(path).await.map_err(|source| Error::Input {
    path: path.to_path_buf(),
    source,
  })?;
  serde_json::from_slice(&bytes).map_err(|source| Error::Malformed {
    path: path.to_path_buf(),
    source,
  })
}

/// Read `path` and extract its records without touching any store.
pub async fn extract_file(path: &Path) -> Result<Vec<LocationRecord>> {
  let document = read_document(path).await?;
  tracing::info!(path = %path.display(), "loaded forecast document");

  let records = extract_records(&document)?;
  tracing::info!(extracted = records.len(), "extracted location records");
  Ok(records)
}

async fn replace_snapshot<S>(store: &S, records: Vec<LocationRecord>) -> Result<LoadSummary>
where
  S: ForecastStore,
{
  let extracted = records.len();
  let inserted = store
    .replace_all(records)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  tracing::info!(inserted, "replaced weather snapshot");

  Ok(LoadSummary {
    extracted,
    inserted,
  })
}

/// Replace the contents of `store` with the records extracted from `path`.
pub async fn load_into<S>(store: &S, path: &Path) -> Result<LoadSummary>
where
  S: ForecastStore,
{
  let records = extract_file(path).await?;
  replace_snapshot(store, records).await
}

/// Open the SQLite store at `config.store_path` and load `config.json_path`.
///
/// The database is only opened once extraction has succeeded, so a missing or
/// broken input never creates an empty database.
pub async fn run(config: &LoadConfig) -> Result<LoadSummary> {
  let records = extract_file(&config.json_path).await?;
  let store = SqliteStore::open(&config.store_path)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  replace_snapshot(&store, records).await
}
