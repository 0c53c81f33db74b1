use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use switchboard_shared::{DashboardConfig, ServiceConfig};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_host: String,
    pub server_port: u16,
    pub config_path: PathBuf,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            config_path: env::var("SWITCHBOARD_CONFIG")
                .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
                .into(),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "./static".to_string())
                .into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Dashboard configuration, read once at startup and shared read-only.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub services: Vec<ServiceConfig>,
    pub docker_status_url: String,
    pub toggle_service_url: String,
    pub poll_interval_seconds: u64,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.docker_status_url.trim().is_empty() {
            return Err(ConfigError::Invalid("dockerStatusUrl is empty".to_string()));
        }
        if self.toggle_service_url.trim().is_empty() {
            return Err(ConfigError::Invalid("toggleServiceUrl is empty".to_string()));
        }
        if self.poll_interval_seconds == 0 {
            return Err(ConfigError::Invalid(
                "pollIntervalSeconds must be greater than zero".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for service in &self.services {
            if service.name.is_empty() {
                return Err(ConfigError::Invalid("service with empty name".to_string()));
            }
            if !seen.insert(service.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "service {} is listed more than once",
                    service.name
                )));
            }
        }
        Ok(())
    }

    pub fn dashboard(&self) -> DashboardConfig {
        DashboardConfig {
            services: self.services.clone(),
            poll_interval_seconds: self.poll_interval_seconds,
        }
    }
}
