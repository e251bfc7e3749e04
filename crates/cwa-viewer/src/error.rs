//! Error types and axum `IntoResponse` implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("store error: {0}")]
  Store(#[from] cwa_store_sqlite::Error),

  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("template error: {0}")]
  Template(#[from] tera::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    tracing::error!(error = %self, "request failed");
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(json!({ "error": self.to_string() })),
    )
      .into_response()
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
