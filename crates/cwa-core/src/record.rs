//! LocationRecord: one row of the `weather` table.

use serde::{Deserialize, Serialize};

/// Name of the table the loader owns and the viewer reads.
pub const TABLE_NAME: &str = "weather";

/// Column labels shown by the viewer, in projection order.
pub const DISPLAY_LABELS: [&str; 4] =
  ["Region", "Min Temp (°C)", "Max Temp (°C)", "Weather Condition"];

/// First-day forecast for a single location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
  pub location:    String,
  pub min_temp:    f64,
  pub max_temp:    f64,
  pub description: String,
}
