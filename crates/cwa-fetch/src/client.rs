//! Async HTTP client for the CWA open-data file API.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::{Error, FetchConfig, Result};

/// Build `<base_url>/<dataset_id>?Authorization=…&downloadType=WEB&format=JSON`.
pub fn request_url(config: &FetchConfig) -> Result<Url> {
  let endpoint = format!(
    "{}/{}",
    config.base_url.trim_end_matches('/'),
    config.dataset_id.trim_start_matches('/'),
  );
  Url::parse_with_params(&endpoint, [
    ("Authorization", config.api_key.as_str()),
    ("downloadType", "WEB"),
    ("format", "JSON"),
  ])
  .map_err(|e| Error::InvalidUrl(format!("{endpoint}: {e}")))
}

/// Issues the single forecast download.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ForecastClient {
  client: Client,
  url:    Url,
}

impl ForecastClient {
  pub fn new(config: &FetchConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .map_err(Error::Transport)?;
    Ok(Self {
      client,
      url: request_url(config)?,
    })
  }

  /// `GET <base_url>/<dataset_id>` and decode the body as JSON.
  ///
  /// No retry: the first failure is returned.
  pub async fn fetch(&self) -> Result<Value> {
    // The query string carries the credential; log the path only.
    tracing::info!(endpoint = %self.url.path(), "requesting forecast document");

    let resp = self
      .client
      .get(self.url.clone())
      .send()
      .await
      .map_err(Error::Transport)?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status(status));
    }

    let body = resp.bytes().await.map_err(Error::Transport)?;
    tracing::debug!(bytes = body.len(), "received forecast document");
    serde_json::from_slice(&body).map_err(Error::Parse)
  }
}
