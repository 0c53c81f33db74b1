use anyhow::{Context, Result};
use std::time::Duration;

/// Every outbound call gives up after this long.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}
