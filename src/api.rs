/// Envista API operations: station catalog, station-name lookup, and
/// per-station time-series retrieval.
///
/// URL construction and response parsing are plain functions so they
/// can be exercised without a network; `DeqClient` composes them with
/// the retrying transport and attaches auth headers. A fresh API token
/// is fetched per outer call — upstream auth does not require session
/// reuse, and skipping the cache keeps the client stateless.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::config::ClientConfig;
use crate::model::{EnvistaError, MonitorData, Region};
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// Request parameters
// ---------------------------------------------------------------------------

/// Parameters for one time-series query.
///
/// `resolution` is the sampling interval in minutes and must be a
/// positive integer: 60 for hourly data, 1440 for daily averages;
/// some stations also offer 1 and 5. `agg_method` values observed to
/// work upstream are `"Average"` and `"RunningAverage"`. `from` must
/// not be after `to`; this is the caller's responsibility and is not
/// validated here, matching upstream's own lenient behavior. An
/// unknown `station_id` yields an empty or error response upstream,
/// which simply propagates.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesRequest {
    pub station_id: i64,
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    /// Channel ids to filter to; `None` requests every channel.
    pub channels: Option<Vec<i64>>,
    pub resolution: i64,
    pub agg_method: String,
    pub percent_valid: i64,
}

impl TimeSeriesRequest {
    /// Builds a request with the upstream defaults: hourly resolution,
    /// `Average` aggregation, 75% validity threshold, all channels.
    pub fn new(station_id: i64, from: NaiveDateTime, to: NaiveDateTime) -> TimeSeriesRequest {
        TimeSeriesRequest {
            station_id,
            from,
            to,
            channels: None,
            resolution: 60,
            agg_method: "Average".to_string(),
            percent_valid: 75,
        }
    }
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Timestamp format the data endpoint expects for `from`/`to`.
const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// URL of the region/station catalog endpoint.
pub fn build_catalog_url(config: &ClientConfig) -> String {
    format!("{}/regions", config.stations_base_url)
}

/// URL of the account endpoint that issues API tokens.
pub fn build_token_url(config: &ClientConfig) -> String {
    format!("{}/Account/GetApiToken", config.account_base_url)
}

/// Builds the full time-series query URL for a station.
///
/// Note `precentValid`: the misspelling is the upstream contract, not
/// a typo here. The fixed boolean parameters mirror what the DEQ web
/// frontend sends; the service rejects requests without them.
pub fn build_timeseries_url(config: &ClientConfig, request: &TimeSeriesRequest) -> String {
    let filter_channels = match &request.channels {
        Some(ids) => ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(","),
        None => String::new(),
    };

    format!(
        "{}/stations/{}/{}?filterChannels={}&from={}&to={}&fromTimebase={}&toTimebase={}\
         &precentValid={}&timeBeginning=false&useBackWard=true&unitConversion=false\
         &includeSummary=false&onlySummary=false",
        config.stations_base_url,
        request.station_id,
        urlencoding::encode(&request.agg_method),
        filter_channels,
        request.from.format(QUERY_TIME_FORMAT),
        request.to.format(QUERY_TIME_FORMAT),
        request.resolution,
        request.resolution,
        request.percent_valid,
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses the catalog response (a JSON array of region objects) and
/// drops the all-zero placeholder records upstream includes.
///
/// # Errors
/// - `EnvistaError::ParseError` — a region is missing a structural key
///   (`regionId`, `name`, `stations`) or the body is malformed.
/// - `EnvistaError::DateFormatError` — a monitor date string did not
///   match `MM/DD/YYYY hh:mm:ss AM|PM`.
pub fn parse_catalog_response(body: &str) -> Result<Vec<Region>, EnvistaError> {
    let regions: Vec<Region> = serde_json::from_str(body).map_err(EnvistaError::from_json)?;
    Ok(regions.into_iter().filter(Region::is_valid).collect())
}

/// Parses a time-series response body (`{ "data": [...] }`).
pub fn parse_timeseries_response(body: &str) -> Result<MonitorData, EnvistaError> {
    serde_json::from_str(body).map_err(EnvistaError::from_json)
}

/// Extracts the bearer token from the auth response, which upstream
/// returns either as a bare JSON string or as an object with a
/// `token` key.
pub fn extract_token(body: &str) -> Result<String, EnvistaError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| EnvistaError::ParseError(format!("auth response: {}", e)))?;

    match value {
        serde_json::Value::String(token) => Ok(token),
        serde_json::Value::Object(fields) => fields
            .get("token")
            .and_then(|t| t.as_str())
            .map(|t| t.to_string())
            .ok_or_else(|| {
                EnvistaError::ParseError("auth response object has no token field".to_string())
            }),
        other => Err(EnvistaError::ParseError(format!(
            "auth response is neither a string nor an object: {}",
            other
        ))),
    }
}

/// Flattens a parsed catalog into a station-id → display-name lookup.
/// Stations without a name are skipped; if a station id recurs across
/// regions (not observed under normal data), the last occurrence wins.
pub fn station_name_index(regions: &[Region]) -> HashMap<i64, String> {
    let mut names = HashMap::new();
    for region in regions {
        for station in &region.stations {
            if let Some(name) = &station.name {
                names.insert(station.station_id, name.clone());
            }
        }
    }
    names
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Blocking client for the Oregon DEQ Envista API.
///
/// Each public operation performs its network round trips sequentially
/// and returns a fresh, independently owned result; there is no shared
/// mutable state, caching, or persistence.
pub struct DeqClient {
    config: ClientConfig,
    transport: Transport,
}

impl DeqClient {
    pub fn new(config: ClientConfig) -> Result<DeqClient, EnvistaError> {
        let transport = Transport::new(&config)?;
        Ok(DeqClient { config, transport })
    }

    /// Fetches the full station catalog, one `Region` per valid region.
    /// Placeholder region records (id 0 / empty name) are dropped.
    pub fn station_catalog(&self) -> Result<Vec<Region>, EnvistaError> {
        let url = build_catalog_url(&self.config);
        let body = self.transport.get(&url, &self.request_headers()?)?;
        parse_catalog_response(&body)
    }

    /// Fetches the catalog and derives a station-id → display-name map.
    ///
    /// Useful for discovering valid `station_id` values for
    /// `time_series`; print the result for a current list. A November
    /// 2023 snapshot, for orientation:
    ///
    /// ```text
    /// 1: Tualatin Bradbury Court      2: Portland SE Lafayette
    /// 7: Sauvie Island               11: Salem State Hospital
    /// 20: Medford TV                 26: Klamath Falls Peterson School
    /// 28: Bend Pump Station          56: Eugene Amazon Park
    /// 90: Roseburg Fire Dept        133: McMinnville High School
    /// ```
    pub fn station_names(&self) -> Result<HashMap<i64, String>, EnvistaError> {
        let catalog = self.station_catalog()?;
        Ok(station_name_index(&catalog))
    }

    /// Fetches time-series data for one station over a date range.
    pub fn time_series(&self, request: &TimeSeriesRequest) -> Result<MonitorData, EnvistaError> {
        let url = build_timeseries_url(&self.config, request);
        let body = self.transport.get(&url, &self.request_headers()?)?;
        parse_timeseries_response(&body)
    }

    /// Standard headers plus a freshly fetched bearer token.
    fn request_headers(&self) -> Result<Vec<(String, String)>, EnvistaError> {
        let mut headers = standard_headers();
        headers.push(("Authorization".to_string(), format!("ApiToken {}", self.fetch_token()?)));
        Ok(headers)
    }

    /// Acquires an API token from the account endpoint. Token endpoint
    /// failures look like any transient failure and share the same
    /// retry policy.
    fn fetch_token(&self) -> Result<String, EnvistaError> {
        let url = build_token_url(&self.config);
        let body = self.transport.post_json(
            &url,
            &serde_json::json!({ "userName": "web" }),
            &standard_headers(),
        )?;
        extract_token(&body)
    }
}

fn standard_headers() -> Vec<(String, String)> {
    vec![(
        "Content-Type".to_string(),
        "application/json; charset=UTF-8".to_string(),
    )]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
