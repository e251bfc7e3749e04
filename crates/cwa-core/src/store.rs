//! The `ForecastStore` trait.
//!
//! Implemented by storage backends (e.g. `cwa-store-sqlite`). The loader
//! depends on this abstraction rather than on a concrete backend.

use std::future::Future;

use crate::record::LocationRecord;

/// Abstraction over the single-snapshot forecast table.
///
/// The table only ever holds the records of one fetch. Writers replace the
/// whole snapshot; there is no history and no partial update.
pub trait ForecastStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Discard every stored record and insert `records` in their place, as one
  /// atomic unit. Returns the number of rows inserted.
  ///
  /// On error the previous snapshot is left untouched.
  fn replace_all(
    &self,
    records: Vec<LocationRecord>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Return every stored record in insertion order.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<LocationRecord>, Self::Error>> + Send + '_;

  /// Number of stored records.
  fn count(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
