//! Writing the fetched document to disk.

use std::{
  io::{self, Write as _},
  path::{Path, PathBuf},
};

use serde::Serialize as _;
use serde_json::{Serializer, Value, ser::PrettyFormatter};
use tempfile::NamedTempFile;

use crate::{Error, Result};

const INDENT: &[u8] = b"    ";

/// Pretty-print `document` (four-space indent, key order and non-ASCII text
/// kept as-is).
pub fn encode_document(document: &Value) -> Result<Vec<u8>> {
  let mut buf = Vec::new();
  let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
  document.serialize(&mut ser).map_err(Error::Encode)?;
  Ok(buf)
}

/// Write `document` to `path`, replacing any existing file, and return the
/// absolute path written.
///
/// The bytes land in a temporary file in the same directory and are persisted
/// over `path`, so `path` never holds a truncated document. The temporary file
/// is removed if any step fails.
pub async fn write_document(document: &Value, path: &Path) -> Result<PathBuf> {
  let bytes = encode_document(document)?;
  let target = path.to_path_buf();
  let write_err = |source| Error::Write {
    path: path.to_path_buf(),
    source,
  };

  tokio::task::spawn_blocking(move || persist_bytes(&bytes, &target))
    .await
    .map_err(|e| write_err(io::Error::other(e)))?
    .map_err(write_err)?;

  tokio::fs::canonicalize(path).await.map_err(write_err)
}

fn persist_bytes(bytes: &[u8], path: &Path) -> io::Result<()> {
  if path.file_name().is_none() {
    return Err(io::Error::new(
      io::ErrorKind::InvalidInput,
      "output path has no file name",
    ));
  }
  let parent = match path.parent() {
    Some(p) if !p.as_os_str().is_empty() => p,
    _ => Path::new("."),
  };

  let mut tmp = NamedTempFile::new_in(parent)?;
  tmp.write_all(bytes)?;
  tmp.as_file().sync_all()?;
  tmp.persist(path).map_err(|e| e.error)?;
  Ok(())
}
