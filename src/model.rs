/// Domain types for the Oregon DEQ Envista API.
///
/// Every struct here mirrors one JSON object shape returned by the
/// upstream service. The `#[serde(rename)]` attributes are the alias
/// table: upstream key names are a mix of camelCase, SCREAMING case
/// (`AQSCODE`), and prefixed forms (`MON_StartDate`), and schema drift
/// is handled by editing the rename on the affected field.
///
/// All fields are optional except `Station::station_id` and the
/// container sequences — the upstream schema is not contractually
/// guaranteed field-by-field, and an absent or null value must stay
/// distinguishable from zero/empty. Parsed models re-serialize to the
/// upstream key convention field-for-field, except for two documented
/// normalizations: monitor dates are emitted in ISO form and `height`
/// is emitted as an integer even when upstream sent a numeric string.

use chrono::NaiveDateTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing Envista data.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvistaError {
    /// Non-2xx HTTP response, with the status line reason preserved.
    HttpError { status: u16, reason: String },
    /// Connection-level failure (DNS, refused, timeout, TLS).
    NetworkError(String),
    /// The response body did not match the expected structure.
    ParseError(String),
    /// A monitor date string did not match `MM/DD/YYYY hh:mm:ss AM|PM`.
    ///
    /// Kept separate from `ParseError` so callers can tell "upstream
    /// sent unparseable dates" from "upstream changed its schema".
    DateFormatError(String),
    /// A configuration file could not be read or parsed.
    ConfigError(String),
}

impl std::fmt::Display for EnvistaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvistaError::HttpError { status, reason } => {
                write!(f, "HTTP error {}: {}", status, reason)
            }
            EnvistaError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            EnvistaError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            EnvistaError::DateFormatError(msg) => write!(f, "Date format error: {}", msg),
            EnvistaError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for EnvistaError {}

/// Marker embedded in the serde error raised for malformed monitor
/// dates, used by `EnvistaError::from_json` to classify the failure.
pub(crate) const DATE_FORMAT_MARKER: &str = "expected MM/DD/YYYY hh:mm:ss AM/PM";

impl EnvistaError {
    /// Classifies a serde_json deserialization failure: monitor-date
    /// violations become `DateFormatError`, everything else is a
    /// structural `ParseError`.
    pub(crate) fn from_json(err: serde_json::Error) -> EnvistaError {
        let msg = err.to_string();
        if msg.contains(DATE_FORMAT_MARKER) {
            EnvistaError::DateFormatError(msg)
        } else {
            EnvistaError::ParseError(msg)
        }
    }
}

// ---------------------------------------------------------------------------
// Date handling
// ---------------------------------------------------------------------------

/// Upstream monitor date format, e.g. `"12/31/9999 11:59:59 PM"`.
/// That exact sentinel value means "still active / no end date" and is
/// a valid date (chrono handles year 9999), not a parse failure.
const MONITOR_DATE_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Format used when re-serializing dates and timestamps.
const ISO_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Serde adapter for `MON_StartDate` / `MON_EndDate`: deserializes the
/// upstream 12-hour format, serializes ISO. Absent and null both map to
/// `None`; a present-but-malformed string fails the record.
mod monitor_date {
    use super::*;
    use serde::de::Error as _;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => NaiveDateTime::parse_from_str(&raw, MONITOR_DATE_FORMAT)
                .map(Some)
                .map_err(|_| {
                    D::Error::custom(format!("monitor date \"{}\": {}", raw, DATE_FORMAT_MARKER))
                }),
        }
    }

    pub fn serialize<S>(date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(ISO_DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}

/// Serde adapter for time-series sample timestamps. The data endpoint
/// reports station-local time, sometimes with a UTC offset suffix and
/// sometimes bare; the offset is discarded either way.
mod sample_datetime {
    use super::*;
    use chrono::DateTime;
    use serde::de::Error as _;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.naive_local())
                .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f"))
                .map(Some)
                .map_err(|e| D::Error::custom(format!("sample timestamp \"{}\": {}", raw, e))),
        }
    }

    pub fn serialize<S>(date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(ISO_DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}

/// Deserializer for `Station::height`: upstream sometimes sends the
/// value as a numeric string ("12") instead of an integer. Normalized
/// to an integer here; re-serialization always emits an integer.
fn height_from_int_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("height is not an integer: {}", n))),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("height string is not numeric: \"{}\"", s))),
        Some(other) => Err(D::Error::custom(format!("unexpected height value: {}", other))),
    }
}

// ---------------------------------------------------------------------------
// Station catalog types
// ---------------------------------------------------------------------------

/// Geographic position of a station. Absent for sites without a GPS fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// One measurement channel hosted at a station (e.g. ozone, PM2.5,
/// wind speed), with its availability date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    #[serde(rename = "channelId")]
    pub channel_id: Option<i64>,
    pub name: Option<String>,
    pub alias: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "typeId")]
    pub type_id: Option<i64>,
    #[serde(rename = "pollutantId")]
    pub pollutant_id: Option<i64>,
    pub units: Option<String>,
    #[serde(rename = "unitID")]
    pub unit_id: Option<i64>,
    #[serde(rename = "mapView")]
    pub map_view: Option<bool>,
    #[serde(rename = "isIndex")]
    pub is_index: Option<bool>,
    #[serde(rename = "PollutantCategory")]
    pub pollutant_category: Option<i64>,
    #[serde(rename = "NumericFormat")]
    pub numeric_format: Option<String>,
    #[serde(rename = "LowRange")]
    pub low_range: Option<i64>,
    #[serde(rename = "HighRange")]
    pub high_range: Option<i64>,
    pub state: Option<i64>,
    #[serde(rename = "PctValid")]
    pub pct_valid: Option<i64>,
    #[serde(rename = "MonitorTitle")]
    pub monitor_title: Option<String>,
    /// First date with data.
    #[serde(rename = "MON_StartDate", default, with = "monitor_date")]
    pub mon_start_date: Option<NaiveDateTime>,
    /// Last date with data; `12/31/9999 11:59:59 PM` means still active.
    #[serde(rename = "MON_EndDate", default, with = "monitor_date")]
    pub mon_end_date: Option<NaiveDateTime>,
}

/// A physical monitoring site and the monitors installed at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique key for the data endpoint; the only required field.
    #[serde(rename = "stationId")]
    pub station_id: i64,
    #[serde(rename = "stationsTag")]
    pub stations_tag: Option<String>,
    #[serde(default, deserialize_with = "height_from_int_or_string")]
    pub height: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
    pub location: Option<Location>,
    /// Sampling interval in minutes.
    pub timebase: Option<i64>,
    pub active: Option<bool>,
    pub owner: Option<String>,
    #[serde(rename = "ownerId")]
    pub owner_id: Option<i64>,
    #[serde(rename = "regionId")]
    pub region_id: Option<i64>,
    pub monitors: Option<Vec<Monitor>>,
    #[serde(rename = "StationTarget")]
    pub station_target: Option<String>,
    #[serde(rename = "TargetId")]
    pub target_id: Option<i64>,
    #[serde(rename = "County")]
    pub county: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "timeBases")]
    pub time_bases: Option<Vec<i64>>,
    #[serde(rename = "additionalTimebases")]
    pub additional_timebases: Option<String>,
    #[serde(rename = "isNonContinuous")]
    pub is_non_continuous: Option<String>,
    #[serde(rename = "mapView")]
    pub map_view: Option<bool>,
    #[serde(rename = "aqiView")]
    pub aqi_view: Option<bool>,
    pub mobile: Option<bool>,
    /// EPA Air Quality System site code.
    #[serde(rename = "AQSCODE")]
    pub aqscode: Option<String>,
}

/// A named geographic grouping of stations.
///
/// The catalog response includes all-zero placeholder region records;
/// only regions with a non-zero id and non-empty name are valid (see
/// `Region::is_valid`). The three keys below must be *present* in the
/// source — `deserialize_with = "Option::deserialize"` disables serde's
/// missing-key-to-None shortcut, so an absent key is a schema violation
/// while an explicit null is tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "regionId", deserialize_with = "Option::deserialize")]
    pub region_id: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    pub stations: Vec<Station>,
}

impl Region {
    /// True for real regions; false for the upstream placeholder
    /// records (id 0 / empty name) the catalog fetch silently drops.
    pub fn is_valid(&self) -> bool {
        self.region_id.is_some_and(|id| id != 0) && self.name.as_deref().is_some_and(|n| !n.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Time-series types
// ---------------------------------------------------------------------------

/// One reading of one monitor within a time-series sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Never observed non-null in practice, but preserved as sent.
    pub value_date: Option<serde_json::Value>,
    pub status: Option<i64>,
    pub value: Option<f64>,
    pub valid: Option<bool>,
    pub id: Option<i64>,
    pub units: Option<String>,
    pub name: Option<String>,
}

/// One time-series sample: every channel reading at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDatum {
    #[serde(default, with = "sample_datetime")]
    pub datetime: Option<NaiveDateTime>,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// Full response to a time-series query, in upstream order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorData {
    pub data: Vec<StationDatum>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
