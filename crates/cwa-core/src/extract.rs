//! Extraction of [`LocationRecord`]s from a raw forecast document.
//!
//! The document shape is dictated by the CWA open-data API. Every lookup goes
//! through a [`Cursor`] that remembers the path walked so far, so any missing
//! key surfaces as one [`Error::MissingField`] naming where the walk stopped.

use std::collections::HashSet;

use serde_json::Value;

use crate::{Error, LocationRecord, Result};

/// Keys leading from the document root to the per-location list.
const LOCATIONS_PATH: [&str; 7] = [
  "cwaopendata",
  "resources",
  "resource",
  "data",
  "agrWeatherForecasts",
  "weatherForecasts",
  "location",
];

/// Index of "today" in every `daily` series.
const FIRST_DAY: usize = 0;

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// A position inside the document plus the dotted path that led to it.
struct Cursor<'a> {
  value: &'a Value,
  path:  String,
}

impl<'a> Cursor<'a> {
  fn root(value: &'a Value) -> Self {
    Self {
      value,
      path: String::new(),
    }
  }

  fn missing(path: String) -> Error { Error::MissingField { path } }

  fn key(&self, key: &str) -> Result<Cursor<'a>> {
    let path = if self.path.is_empty() {
      key.to_owned()
    } else {
      format!("{}.{key}", self.path)
    };
    match self.value.as_object().and_then(|map| map.get(key)) {
      Some(value) => Ok(Cursor { value, path }),
      None => Err(Self::missing(path)),
    }
  }

  fn index(&self, index: usize) -> Result<Cursor<'a>> {
    let path = format!("{}[{index}]", self.path);
    match self.value.as_array().and_then(|items| items.get(index)) {
      Some(value) => Ok(Cursor { value, path }),
      None => Err(Self::missing(path)),
    }
  }

  fn len(&self) -> Result<usize> {
    self
      .value
      .as_array()
      .map(Vec::len)
      .ok_or_else(|| Self::missing(self.path.clone()))
  }

  fn text(&self) -> Result<&'a str> {
    self
      .value
      .as_str()
      .ok_or_else(|| Self::missing(self.path.clone()))
  }

  /// Coerce a string or number to `f64`.
  fn temperature(&self, location: &str, field: &'static str) -> Result<f64> {
    let parsed = match self.value {
      Value::Number(n) => n.as_f64(),
      Value::String(s) => s.trim().parse::<f64>().ok(),
      _ => None,
    };
    parsed.filter(|v| v.is_finite()).ok_or_else(|| Error::InvalidTemperature {
      location: location.to_owned(),
      field,
      value: self.value.to_string(),
    })
  }
}

// ─── Extraction ──────────────────────────────────────────────────────────────

/// Extract the first-day forecast of every location in `document`.
///
/// Fails as a whole if any location lacks one of the `MinT`, `MaxT` or `Wx`
/// daily series, if a series is empty, or if a location name repeats. An
/// empty location list yields an empty vector.
pub fn extract_records(document: &Value) -> Result<Vec<LocationRecord>> {
  let mut cursor = Cursor::root(document);
  for key in LOCATIONS_PATH {
    cursor = cursor.key(key)?;
  }

  let count = cursor.len()?;
  let mut records = Vec::with_capacity(count);
  let mut seen = HashSet::with_capacity(count);

  for i in 0..count {
    let record = extract_location(&cursor.index(i)?)?;
    if !seen.insert(record.location.clone()) {
      return Err(Error::DuplicateLocation(record.location));
    }
    records.push(record);
  }

  Ok(records)
}

fn extract_location(entry: &Cursor<'_>) -> Result<LocationRecord> {
  let location = entry.key("locationName")?.text()?.to_owned();
  let elements = entry.key("weatherElements")?;
  let first_day =
    |series: &str| elements.key(series)?.key("daily")?.index(FIRST_DAY);

  let min_temp = first_day("MinT")?
    .key("temperature")?
    .temperature(&location, "MinT")?;
  let max_temp = first_day("MaxT")?
    .key("temperature")?
    .temperature(&location, "MaxT")?;
  let description = first_day("Wx")?.key("weather")?.text()?.to_owned();

  Ok(LocationRecord {
    location,
    min_temp,
    max_temp,
    description,
  })
}
