//! Route handlers.
//!
//! | Method | Path           | Notes                                        |
//! |--------|----------------|----------------------------------------------|
//! | `GET`  | `/`            | HTML page; read failures render in place      |
//! | `GET`  | `/api/weather` | JSON rows; `[]` when the database is missing |

use axum::{Json, extract::State, response::Html};
use cwa_core::LocationRecord;

use crate::{
  AppState, Result,
  view::{load_view, read_records},
};

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
  let page = load_view(&state.config.store_path).await;
  let html = state
    .pages
    .render(&state.config.title, &state.config.store_path, &page)?;
  Ok(Html(html))
}

/// `GET /api/weather`
pub async fn weather(State(state): State<AppState>) -> Result<Json<Vec<LocationRecord>>> {
  let records = read_records(&state.config.store_path)
    .await?
    .unwrap_or_default();
  Ok(Json(records))
}
