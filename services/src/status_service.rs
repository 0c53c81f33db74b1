use crate::client::{build_client, UPSTREAM_TIMEOUT};
use crate::name_resolver;
use anyhow::Result;
use std::collections::HashMap;
use std::time::Duration;
use switchboard_shared::{ContainerRecord, ServiceConfig, ServiceStatus};

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Failed to fetch container status from {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },
    #[error("Failed to read container status response: {0}")]
    Read(reqwest::Error),
}

/// Reads the runtime's process listing and turns it into per-service status.
pub struct StatusService {
    client: reqwest::Client,
    status_url: String,
}

impl StatusService {
    pub fn new(status_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(status_url, UPSTREAM_TIMEOUT)
    }

    pub fn with_timeout(status_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            status_url: status_url.into(),
        })
    }

    /// Fetch the current listing. Fails as a whole on transport errors; bad
    /// lines inside the body are dropped by [`parse_records`].
    pub async fn fetch_records(&self) -> Result<Vec<ContainerRecord>, StatusError> {
        let response = self
            .client
            .get(&self.status_url)
            .send()
            .await
            .map_err(|source| StatusError::Fetch {
                url: self.status_url.clone(),
                source,
            })?;

        let code = response.status();
        if !code.is_success() {
            log::warn!(
                "Container status source {} answered with {}, parsing body anyway",
                self.status_url,
                code
            );
        }

        let body = response.text().await.map_err(StatusError::Read)?;

        let records = parse_records(&body);
        log::debug!("Status source returned {} container records", records.len());
        Ok(records)
    }

    pub async fn service_statuses(
        &self,
        services: &[ServiceConfig],
    ) -> Result<Vec<ServiceStatus>, StatusError> {
        let records = self.fetch_records().await?;
        Ok(reconcile(services, records))
    }
}

/// Parse a newline-delimited JSON listing, skipping blank and malformed lines.
pub fn parse_records(body: &str) -> Vec<ContainerRecord> {
    body.split('\n')
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .filter_map(|(idx, line)| match serde_json::from_str::<ContainerRecord>(line) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping malformed container record on line {}: {}", idx + 1, e);
                None
            }
        })
        .collect()
}

/// Index records by resolved service name. On duplicate names the record
/// that came last wins.
pub fn index_records(records: Vec<ContainerRecord>) -> HashMap<String, ContainerRecord> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        let key = name_resolver::resolve(&record);
        if let Some(previous) = index.insert(key, record) {
            log::debug!(
                "Container {} shadowed by a later record with the same service name",
                previous.names
            );
        }
    }
    index
}

/// One status per configured service, in configured order.
pub fn reconcile(services: &[ServiceConfig], records: Vec<ContainerRecord>) -> Vec<ServiceStatus> {
    let index = index_records(records);

    services
        .iter()
        .map(|service| match index.get(&service.name) {
            Some(record) => ServiceStatus::observed(service, record),
            None => ServiceStatus::not_found(service),
        })
        .collect()
}
