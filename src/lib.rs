/// deq_envista: client library for the Oregon DEQ Envista air-quality API.
///
/// Retrieves the catalog of monitoring stations grouped by region, and
/// time-series measurements (pollutant concentrations, wind, humidity,
/// …) for a station over a date range. Blocking I/O throughout; every
/// request retries transient failures with a bounded fixed-delay
/// policy.
///
/// # Module structure
///
/// ```text
/// deq_envista
/// ├── model      — domain types (Region, Station, Monitor, Location,
/// │                Channel, StationDatum, MonitorData) + EnvistaError
/// ├── config     — base URLs, retry tuning, timeout (TOML-overridable)
/// ├── transport  — blocking HTTP GET/POST with bounded retry
/// ├── api        — station catalog, name lookup, time-series queries
/// └── fixtures (test only) — representative API response payloads
/// ```
///
/// # Quick start
///
/// ```no_run
/// use deq_envista::{ClientConfig, DeqClient, TimeSeriesRequest};
/// use chrono::NaiveDate;
///
/// let client = DeqClient::new(ClientConfig::default())?;
///
/// // Discover stations, then pull a day of hourly data from one.
/// for (id, name) in client.station_names()? {
///     println!("{}: {}", id, name);
/// }
///
/// let request = TimeSeriesRequest::new(
///     2,
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap(),
/// );
/// let data = client.time_series(&request)?;
/// # Ok::<(), deq_envista::EnvistaError>(())
/// ```

pub mod api;
pub mod config;
pub mod model;
pub mod transport;

#[cfg(test)]
pub(crate) mod fixtures;

pub use api::{DeqClient, TimeSeriesRequest};
pub use config::ClientConfig;
pub use model::{
    Channel, EnvistaError, Location, Monitor, MonitorData, Region, Station, StationDatum,
};
pub use transport::RetryPolicy;
