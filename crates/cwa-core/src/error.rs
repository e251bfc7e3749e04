//! Error types for `cwa-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A key, index, or container expected in the forecast document is absent
  /// or has the wrong JSON type.
  #[error("forecast document is missing `{path}`")]
  MissingField { path: String },

  #[error("location {location:?}: {field} is not a number: {value}")]
  InvalidTemperature {
    location: String,
    field:    &'static str,
    value:    String,
  },

  #[error("location {0:?} appears more than once in the forecast document")]
  DuplicateLocation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
