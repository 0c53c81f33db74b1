use crate::labels::Labels;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNKNOWN_STATE: &str = "unknown";
pub const NOT_FOUND_STATUS: &str = "Not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    pub name: String,
    pub display_name: String,
}

/// One line of the runtime's process listing.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ContainerRecord {
    #[serde(rename = "Command")]
    pub command: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Names")]
    pub names: String,
    #[serde(rename = "Labels")]
    pub labels: Labels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub name: String,
    pub display_name: String,
    pub state: String,
    pub status: String,
}

impl ServiceStatus {
    pub fn not_found(service: &ServiceConfig) -> Self {
        Self {
            name: service.name.clone(),
            display_name: service.display_name.clone(),
            state: UNKNOWN_STATE.to_string(),
            status: NOT_FOUND_STATUS.to_string(),
        }
    }

    pub fn observed(service: &ServiceConfig, record: &ContainerRecord) -> Self {
        Self {
            name: service.name.clone(),
            display_name: service.display_name.clone(),
            state: record.state.clone(),
            status: record.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleDirection {
    Up,
    Down,
}

impl fmt::Display for ToggleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleDirection::Up => write!(f, "up"),
            ToggleDirection::Down => write!(f, "down"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<String>,
}

impl ToggleRequest {
    pub fn up(service: impl Into<String>) -> Self {
        Self {
            up: Some(service.into()),
            down: None,
        }
    }

    pub fn down(service: impl Into<String>) -> Self {
        Self {
            up: None,
            down: Some(service.into()),
        }
    }

    /// The single action this request carries, or `None` when it names
    /// neither direction, both, or an empty service.
    pub fn target(&self) -> Option<(ToggleDirection, &str)> {
        match (self.up.as_deref(), self.down.as_deref()) {
            (Some(name), None) if !name.is_empty() => Some((ToggleDirection::Up, name)),
            (None, Some(name)) if !name.is_empty() => Some((ToggleDirection::Down, name)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub status: String,
}

impl ToggleResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// The part of the configuration handed to the dashboard UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub services: Vec<ServiceConfig>,
    pub poll_interval_seconds: u64,
}
