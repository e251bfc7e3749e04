//! Error type for `cwa-load`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot read forecast file {path:?}: {source}")]
  Input {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("forecast file {path:?} is not valid JSON: {source}")]
  Malformed {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("failed to extract forecasts: {0}")]
  Extract(#[from] cwa_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
