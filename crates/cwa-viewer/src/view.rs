//! Reading the snapshot table into something the page can show.
//!
//! Every call opens a fresh read-only connection and drops it before
//! returning, whatever the outcome.

use std::path::{Path, PathBuf};

use cwa_core::{DISPLAY_LABELS, LocationRecord, store::ForecastStore};
use cwa_store_sqlite::SqliteStore;
use serde::Serialize;

use crate::Result;

/// The forecast rows relabelled for display.
///
/// Temperatures keep the precision they were stored with; whole numbers
/// still show a trailing `.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherTable {
  pub columns: [&'static str; 4],
  pub rows:    Vec<[String; 4]>,
}

impl WeatherTable {
  pub fn from_records(records: &[LocationRecord]) -> Self {
    let rows = records
      .iter()
      .map(|r| {
        [
          r.location.clone(),
          format!("{:?}", r.min_temp),
          format!("{:?}", r.max_temp),
          r.description.clone(),
        ]
      })
      .collect();
    Self {
      columns: DISPLAY_LABELS,
      rows,
    }
  }
}

/// What a single render of the page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageState {
  /// The database file does not exist yet.
  MissingDatabase { path: PathBuf },
  /// The file exists but could not be opened or queried.
  Unreadable { message: String },
  /// The table exists and has no rows.
  Empty,
  Table(WeatherTable),
}

/// Read every record from the database at `path`.
///
/// Returns `Ok(None)` when the file does not exist; never creates it.
pub async fn read_records(path: &Path) -> Result<Option<Vec<LocationRecord>>> {
  if !tokio::fs::try_exists(path).await? {
    return Ok(None);
  }
  let store = SqliteStore::open_read_only(path).await?;
  let records = store.list_all().await?;
  Ok(Some(records))
}

/// Check, open, query, and classify the database at `path`.
pub async fn load_view(path: &Path) -> PageState {
  match read_records(path).await {
    Ok(None) => {
      tracing::warn!(path = %path.display(), "database file not found");
      PageState::MissingDatabase {
        path: path.to_path_buf(),
      }
    }
    Ok(Some(records)) if records.is_empty() => PageState::Empty,
    Ok(Some(records)) => PageState::Table(WeatherTable::from_records(&records)),
    Err(e) => {
      tracing::warn!(path = %path.display(), error = %e, "database read failed");
      PageState::Unreadable {
        message: e.to_string(),
      }
    }
  }
}
