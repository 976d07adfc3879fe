use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use mate_engine::{ServiceSettings, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

/// Settings read from `mate.ron`. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let service = ServiceSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: service.connect_timeout.as_secs(),
            request_timeout_secs: service.request_timeout.as_secs(),
            max_response_bytes: service.max_response_bytes,
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Service settings with an optional endpoint override from the command line.
    pub fn service_settings(&self, endpoint_override: Option<&str>) -> Result<ServiceSettings> {
        let endpoint = endpoint_override.unwrap_or(&self.endpoint).trim();
        let parsed = url::Url::parse(endpoint)
            .with_context(|| format!("invalid conversion service endpoint {endpoint:?}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("conversion service endpoint must use http or https, got {endpoint:?}");
        }

        Ok(ServiceSettings {
            endpoint: parsed.to_string(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_response_bytes: self.max_response_bytes,
        })
    }

    /// Level from the command line if given, else from the file; unknown names fall back to info.
    pub fn level_filter(&self, level_override: Option<&str>) -> LevelFilter {
        let name = level_override.unwrap_or(&self.log_level);
        mate_logging::parse_level(name).unwrap_or(LevelFilter::Info)
    }
}

/// Reads the config file. `Ok(None)` means there is no file at `path`.
pub(crate) fn load_config(path: &Path) -> Result<Option<AppConfig>> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config from {path:?}"));
        }
    };

    let config = ron::from_str(&content)
        .with_context(|| format!("failed to parse config from {path:?}"))?;
    Ok(Some(config))
}
