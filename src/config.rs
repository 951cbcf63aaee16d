/// Client configuration: base URLs, retry tuning, request timeout.
///
/// Defaults target the production Oregon DEQ endpoints and match the
/// retry tuning the upstream service empirically needs. A partial TOML
/// file can override any subset of fields without recompiling; omitted
/// keys keep their defaults. Configuration is read-only after
/// construction — there is no process-wide mutable state.

use serde::Deserialize;
use std::fs;

use crate::model::EnvistaError;

// DEQ data display: https://aqi.oregon.gov

/// Envista API base for the region/station catalog and time-series data.
pub const STATIONS_BASE_URL: &str = "https://aqiapi.oregon.gov/v1/envista";

/// Account base for API token acquisition.
pub const ACCOUNT_BASE_URL: &str = "https://aqi.oregon.gov";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub stations_base_url: String,
    pub account_base_url: String,
    /// Total HTTP attempts per request, including the first.
    pub max_attempts: u32,
    /// Fixed sleep between attempts, in seconds.
    pub retry_delay_secs: u64,
    /// Per-request timeout applied at client construction, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            stations_base_url: STATIONS_BASE_URL.to_string(),
            account_base_url: ACCOUNT_BASE_URL.to_string(),
            max_attempts: 10,
            retry_delay_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from a TOML file. Every key is optional;
    /// omitted keys fall back to the production defaults.
    pub fn from_file(path: &str) -> Result<ClientConfig, EnvistaError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| EnvistaError::ConfigError(format!("failed to read {}: {}", path, e)))?;

        toml::from_str(&contents)
            .map_err(|e| EnvistaError::ConfigError(format!("failed to parse {}: {}", path, e)))
    }
}
