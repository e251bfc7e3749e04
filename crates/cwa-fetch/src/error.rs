//! Error type for `cwa-fetch`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid request URL: {0}")]
  InvalidUrl(String),

  #[error(
    "HTTP request failed with status {0}; check that the API key and \
     dataset id are correct"
  )]
  Status(reqwest::StatusCode),

  #[error("network error: {0}")]
  Transport(#[source] reqwest::Error),

  #[error("response body is not valid JSON: {0}")]
  Parse(#[source] serde_json::Error),

  #[error("failed to encode forecast document: {0}")]
  Encode(#[source] serde_json::Error),

  #[error("failed to write {path:?}: {source}")]
  Write {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
