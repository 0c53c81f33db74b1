use crate::client::{build_client, UPSTREAM_TIMEOUT};
use anyhow::Result;
use reqwest::StatusCode;
use std::time::Duration;
use switchboard_shared::ToggleRequest;

#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error("Service toggle failed with status {}", .status.as_u16())]
    Rejected { status: StatusCode },
    #[error("Failed to reach toggle controller: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Forwards start/stop requests to the controller that owns the containers.
pub struct ToggleService {
    client: reqwest::Client,
    toggle_url: String,
}

impl ToggleService {
    pub fn new(toggle_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(toggle_url, UPSTREAM_TIMEOUT)
    }

    pub fn with_timeout(toggle_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            toggle_url: toggle_url.into(),
        })
    }

    /// POST the request as-is. Only 200 and 202 count as accepted; nothing
    /// is retried.
    pub async fn toggle(&self, request: &ToggleRequest) -> Result<(), ToggleError> {
        let response = self
            .client
            .post(&self.toggle_url)
            .json(request)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::ACCEPTED => Ok(()),
            status => {
                log::warn!("Toggle controller returned status: {}", status.as_u16());
                Err(ToggleError::Rejected { status })
            }
        }
    }
}
