//! Viewer stage: a small axum app that shows the `weather` table.
//!
//! Each request reads the table afresh through a read-only connection; the
//! viewer never writes and never creates the database file.

pub mod error;
pub mod handlers;
pub mod page;
pub mod view;

pub use error::{Error, Result};

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use page::PageRenderer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Viewer settings, deserialised from `cwa.toml` and `CWA_*` variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ViewerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  #[serde(default = "default_title")]
  pub title:      String,
}

fn default_host() -> String { "127.0.0.1".to_string() }

const fn default_port() -> u16 { 8501 }

fn default_store_path() -> PathBuf { PathBuf::from("CWA_data.db") }

fn default_title() -> String { "CWA Weather Forecast".to_string() }

impl Default for ViewerConfig {
  fn default() -> Self {
    Self {
      host:       default_host(),
      port:       default_port(),
      store_path: default_store_path(),
      title:      default_title(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<ViewerConfig>,
  pub pages:  PageRenderer,
}

impl AppState {
  pub fn new(config: ViewerConfig) -> Result<Self> {
    Ok(Self {
      config: Arc::new(config),
      pages:  PageRenderer::new()?,
    })
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the viewer's axum [`Router`].
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/",            get(handlers::index))
    .route("/api/weather", get(handlers::weather))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use std::path::Path;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use cwa_core::{LocationRecord, store::ForecastStore};
  use cwa_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  fn make_state(store_path: &Path) -> AppState {
    AppState::new(ViewerConfig {
      store_path: store_path.to_path_buf(),
      title: "Forecast".to_string(),
      ..ViewerConfig::default()
    })
    .unwrap()
  }

  async fn get_body(state: AppState, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = router(state).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
  }

  fn taipei() -> LocationRecord {
    LocationRecord {
      location:    "Taipei".into(),
      min_temp:    18.0,
      max_temp:    25.0,
      description: "Cloudy".into(),
    }
  }

  // ── Page ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn missing_database_renders_error_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("CWA_data.db");

    let (status, body) = get_body(make_state(&db), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("not found"), "{body}");
    assert!(!body.contains("<table"));
    assert!(!db.exists());
  }

  #[tokio::test]
  async fn empty_table_renders_warning() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("CWA_data.db");
    SqliteStore::open(&db).await.unwrap();

    let (status, body) = get_body(make_state(&db), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("has no rows"), "{body}");
    assert!(!body.contains("<table"));
  }

  #[tokio::test]
  async fn populated_table_renders_rows_and_count() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("CWA_data.db");
    SqliteStore::open(&db)
      .await
      .unwrap()
      .replace_all(vec![taipei()])
      .await
      .unwrap();

    let (status, body) = get_body(make_state(&db), "/").await;
    assert_eq!(status, StatusCode::OK);
    for (i, label) in cwa_core::DISPLAY_LABELS.iter().enumerate() {
      assert!(body.contains(&format!(r#"data-column="{i}">{label}</th>"#)), "missing {label}");
    }
    assert!(body.contains("<td>Taipei</td><td>18.0</td><td>25.0</td><td>Cloudy</td>"));
    assert!(body.contains("1 location loaded."));
  }

  #[tokio::test]
  async fn each_request_reads_current_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("CWA_data.db");
    let writer = SqliteStore::open(&db).await.unwrap();
    let state = make_state(&db);

    let (_, before) = get_body(state.clone(), "/").await;
    assert!(before.contains("has no rows"));

    writer.replace_all(vec![taipei()]).await.unwrap();
    let (_, after) = get_body(state, "/").await;
    assert!(after.contains("<td>Taipei</td>"));
  }

  #[tokio::test]
  async fn unreadable_database_renders_error_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("CWA_data.db");
    // A valid SQLite file without the `weather` table.
    std::fs::File::create(&db).unwrap();

    let (status, body) = get_body(make_state(&db), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Failed to read the database"), "{body}");
  }

  // ── JSON ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn api_returns_rows_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("CWA_data.db");
    SqliteStore::open(&db)
      .await
      .unwrap()
      .replace_all(vec![taipei()])
      .await
      .unwrap();

    let (status, body) = get_body(make_state(&db), "/api/weather").await;
    assert_eq!(status, StatusCode::OK);
    let rows: Vec<LocationRecord> = serde_json::from_str(&body).unwrap();
    assert_eq!(rows, vec![taipei()]);
  }

  #[tokio::test]
  async fn api_returns_empty_list_without_database() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) =
      get_body(make_state(&dir.path().join("absent.db")), "/api/weather").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
  }

  #[tokio::test]
  async fn api_reports_read_failure_as_500() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("CWA_data.db");
    std::fs::File::create(&db).unwrap();

    let (status, body) = get_body(make_state(&db), "/api/weather").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("\"error\""));
  }
}
