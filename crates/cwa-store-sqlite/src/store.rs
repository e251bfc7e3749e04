//! [`SqliteStore`], the SQLite implementation of [`ForecastStore`].

use std::path::Path;

use rusqlite::OpenFlags;

use cwa_core::{LocationRecord, store::ForecastStore};

use crate::{
  Result,
  schema::{COUNT_ALL, DELETE_ALL, INSERT_RECORD, SCHEMA, SELECT_ALL},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// The forecast snapshot table backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. The
/// connection closes when the last clone is dropped.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and ensure the `weather` table exists.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an existing database without creating the file or the schema.
  ///
  /// Fails if `path` does not exist. Writes through this handle fail.
  pub async fn open_read_only(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_with_flags(
      path,
      OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .await?;
    Ok(Self { conn })
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run raw SQL against the connection; tests use it to install triggers.
  #[cfg(test)]
  pub(crate) async fn execute_batch(&self, sql: &'static str) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(sql)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ForecastStore impl ──────────────────────────────────────────────────────

impl ForecastStore for SqliteStore {
  type Error = crate::Error;

  async fn replace_all(&self, records: Vec<LocationRecord>) -> Result<usize> {
    let inserted = self
      .conn
      .call(move |conn| {
        // Rolls back on drop unless committed.
        let tx = conn.transaction()?;
        let deleted = tx.execute(DELETE_ALL, [])?;

        let mut inserted = 0;
        {
          let mut stmt = tx.prepare(INSERT_RECORD)?;
          for r in &records {
            inserted += stmt.execute(rusqlite::params![
              r.location,
              r.min_temp,
              r.max_temp,
              r.description,
            ])?;
          }
        }

        tx.commit()?;
        tracing::debug!(deleted, inserted, "replaced weather snapshot");
        Ok(inserted)
      })
      .await?;
    Ok(inserted)
  }

  async fn list_all(&self) -> Result<Vec<LocationRecord>> {
    let records = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(SELECT_ALL)?;
        let rows = stmt
          .query_map([], |row| {
            Ok(LocationRecord {
              location:    row.get(0)?,
              min_temp:    row.get(1)?,
              max_temp:    row.get(2)?,
              description: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(records)
  }

  async fn count(&self) -> Result<usize> {
    let n: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row(COUNT_ALL, [], |row| row.get(0))?))
      .await?;
    Ok(n as usize)
  }
}
