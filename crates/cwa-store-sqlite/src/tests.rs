//! Integration tests for `SqliteStore` against in-memory and on-disk databases.

use cwa_core::{LocationRecord, store::ForecastStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn record(location: &str, min_temp: f64, max_temp: f64, description: &str) -> LocationRecord {
  LocationRecord {
    location: location.into(),
    min_temp,
    max_temp,
    description: description.into(),
  }
}

fn snapshot() -> Vec<LocationRecord> {
  vec![
    record("臺北市", 18.0, 25.0, "多雲"),
    record("高雄市", 22.5, 30.25, "晴"),
    record("花蓮縣", 19.0, 26.0, "短暫陣雨"),
  ]
}

// ─── Snapshot replacement ────────────────────────────────────────────────────

#[tokio::test]
async fn new_store_is_empty() {
  let s = store().await;
  assert_eq!(s.count().await.unwrap(), 0);
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn replace_all_inserts_every_record() {
  let s = store().await;
  let inserted = s.replace_all(snapshot()).await.unwrap();
  assert_eq!(inserted, 3);
  assert_eq!(s.count().await.unwrap(), 3);
}

#[tokio::test]
async fn list_all_round_trips_values_in_order() {
  let s = store().await;
  s.replace_all(snapshot()).await.unwrap();
  assert_eq!(s.list_all().await.unwrap(), snapshot());
}

#[tokio::test]
async fn replace_all_is_idempotent() {
  let s = store().await;
  s.replace_all(snapshot()).await.unwrap();
  s.replace_all(snapshot()).await.unwrap();
  assert_eq!(s.count().await.unwrap(), 3);
  assert_eq!(s.list_all().await.unwrap(), snapshot());
}

#[tokio::test]
async fn replace_all_discards_previous_snapshot() {
  let s = store().await;
  s.replace_all(snapshot()).await.unwrap();
  s.replace_all(vec![record("Taipei", 18.0, 25.0, "Cloudy")])
    .await
    .unwrap();

  let rows = s.list_all().await.unwrap();
  assert_eq!(rows, vec![record("Taipei", 18.0, 25.0, "Cloudy")]);
}

#[tokio::test]
async fn replace_all_with_nothing_clears_table() {
  let s = store().await;
  s.replace_all(snapshot()).await.unwrap();
  assert_eq!(s.replace_all(Vec::new()).await.unwrap(), 0);
  assert_eq!(s.count().await.unwrap(), 0);
}

#[tokio::test]
async fn failed_insert_rolls_back_to_previous_snapshot() {
  let s = store().await;
  s.replace_all(snapshot()).await.unwrap();
  s.execute_batch(
    "CREATE TRIGGER reject_boom BEFORE INSERT ON weather
     WHEN NEW.location = 'boom'
     BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
  )
  .await
  .unwrap();

  let result = s
    .replace_all(vec![
      record("Taipei", 18.0, 25.0, "Cloudy"),
      record("boom", 0.0, 0.0, "n/a"),
    ])
    .await;
  assert!(result.is_err());

  // The DELETE ran inside the same transaction and was undone.
  assert_eq!(s.list_all().await.unwrap(), snapshot());
}

// ─── On-disk handles ─────────────────────────────────────────────────────────

#[tokio::test]
async fn open_creates_file_and_persists_across_handles() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("CWA_data.db");

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.replace_all(snapshot()).await.unwrap();
  }
  assert!(path.exists());

  let reader = SqliteStore::open_read_only(&path).await.unwrap();
  assert_eq!(reader.list_all().await.unwrap(), snapshot());
}

#[tokio::test]
async fn open_read_only_does_not_create_missing_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("absent.db");

  assert!(SqliteStore::open_read_only(&path).await.is_err());
  assert!(!path.exists());
}

#[tokio::test]
async fn read_only_handle_rejects_writes() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("CWA_data.db");
  SqliteStore::open(&path)
    .await
    .unwrap()
    .replace_all(snapshot())
    .await
    .unwrap();

  let reader = SqliteStore::open_read_only(&path).await.unwrap();
  assert!(reader.replace_all(Vec::new()).await.is_err());
  assert_eq!(reader.count().await.unwrap(), 3);
}

#[tokio::test]
async fn read_only_handle_without_table_fails_to_list() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("empty.db");
  std::fs::File::create(&path).unwrap();

  let reader = SqliteStore::open_read_only(&path).await.unwrap();
  assert!(reader.list_all().await.is_err());
}
