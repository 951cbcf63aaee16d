/// Test fixtures: representative JSON payloads from the Envista API.
///
/// These fixtures are structurally complete but truncated to the
/// minimum needed to exercise the parsers. They reflect the real
/// payloads returned by:
///   https://aqiapi.oregon.gov/v1/envista/regions
///   https://aqiapi.oregon.gov/v1/envista/stations/<id>/<aggMethod>
///
/// Catalog response shape:
///   [ region... ]
///     .regionId, .name            — null/0 in placeholder records
///     .stations[]
///       .stationId               — the only guaranteed field
///       .height                  — sometimes a numeric STRING ("12")
///       .monitors[]
///         .MON_StartDate / .MON_EndDate — "MM/DD/YYYY hh:mm:ss AM|PM";
///           "12/31/9999 11:59:59 PM" means still active
///
/// Data response shape:
///   { "data": [ { "datetime": ..., "channels": [...] } ] }
///   channels[].value_date has never been observed non-null.

/// Catalog with 5 valid regions and 2 upstream placeholder records
/// (id 0, empty name). Region 1 carries fully populated stations,
/// including a string-encoded height and a nameless station (id 99).
pub(crate) fn fixture_catalog_json() -> &'static str {
    r#"[
      {
        "regionId": 1,
        "name": "Portland Metro",
        "stations": [
          {
            "stationId": 1,
            "stationsTag": ",1,",
            "height": 43,
            "name": "Tualatin Bradbury Court",
            "shortName": "Tualatin",
            "location": { "latitude": 45.3997, "longitude": -122.7454 },
            "timebase": 60,
            "active": true,
            "owner": "Oregon DEQ",
            "ownerId": 1,
            "regionId": 1,
            "monitors": [
              {
                "channelId": 36,
                "name": "PM2.5 Est",
                "alias": null,
                "description": null,
                "active": true,
                "typeId": 10,
                "pollutantId": 2,
                "units": "ug/m3",
                "unitID": 650,
                "mapView": true,
                "isIndex": true,
                "PollutantCategory": 1,
                "NumericFormat": "0.0",
                "LowRange": 0,
                "HighRange": 500,
                "state": 0,
                "PctValid": 75,
                "MonitorTitle": "PM2.5 Estimate",
                "MON_StartDate": "01/01/2014 12:00:00 AM",
                "MON_EndDate": "12/31/9999 11:59:59 PM"
              }
            ],
            "StationTarget": "",
            "TargetId": 0,
            "County": "Washington",
            "city": "Tualatin",
            "address": "Bradbury Court",
            "timeBases": [1, 5, 60, 1440],
            "additionalTimebases": null,
            "isNonContinuous": "false",
            "mapView": true,
            "aqiView": true,
            "mobile": false,
            "AQSCODE": "410670004"
          },
          {
            "stationId": 2,
            "stationsTag": ",2,",
            "height": "12",
            "name": "Portland SE Lafayette",
            "shortName": "SE Lafayette",
            "location": { "latitude": 45.4966, "longitude": -122.6029 },
            "timebase": 60,
            "active": true,
            "owner": "Oregon DEQ",
            "ownerId": 1,
            "regionId": 1,
            "monitors": [
              {
                "channelId": 27,
                "name": "OZONE",
                "alias": null,
                "description": null,
                "active": true,
                "typeId": 11,
                "pollutantId": 1,
                "units": "ppb",
                "unitID": 640,
                "mapView": true,
                "isIndex": true,
                "PollutantCategory": 1,
                "NumericFormat": "0",
                "LowRange": 0,
                "HighRange": 250,
                "state": 0,
                "PctValid": 75,
                "MonitorTitle": "Ozone",
                "MON_StartDate": "05/03/2018 01:30:00 PM",
                "MON_EndDate": "12/31/9999 11:59:59 PM"
              }
            ],
            "StationTarget": "",
            "TargetId": 0,
            "County": "Multnomah",
            "city": "Portland",
            "address": "SE Lafayette St",
            "timeBases": [60, 1440],
            "additionalTimebases": null,
            "isNonContinuous": "false",
            "mapView": true,
            "aqiView": true,
            "mobile": false,
            "AQSCODE": "410510080"
          }
        ]
      },
      { "regionId": 0, "name": "", "stations": [] },
      {
        "regionId": 2,
        "name": "Willamette Valley",
        "stations": [
          { "stationId": 11, "name": "Salem State Hospital" },
          { "stationId": 56, "name": "Eugene Amazon Park" }
        ]
      },
      {
        "regionId": 3,
        "name": "Southern Oregon",
        "stations": [
          { "stationId": 20, "name": "Medford TV" },
          { "stationId": 90, "name": "Roseburg Fire Dept" }
        ]
      },
      { "regionId": 0, "name": null, "stations": [] },
      {
        "regionId": 4,
        "name": "Central Oregon",
        "stations": [
          { "stationId": 28, "name": "Bend Pump Station" }
        ]
      },
      {
        "regionId": 5,
        "name": "Eastern Oregon",
        "stations": [
          { "stationId": 33, "name": "Pendleton McKay Creek" },
          { "stationId": 99, "name": null }
        ]
      }
    ]"#
}

/// A single fully-populated region for the round-trip law: every model
/// field is present, `height` arrives as a numeric string, and both
/// monitor dates use the upstream 12-hour format.
pub(crate) fn fixture_round_trip_region() -> &'static str {
    r#"{
      "regionId": 1,
      "name": "Portland Metro",
      "stations": [
        {
          "stationId": 2,
          "stationsTag": ",2,",
          "height": "12",
          "name": "Portland SE Lafayette",
          "shortName": "SE Lafayette",
          "location": { "latitude": 45.4966, "longitude": -122.6029 },
          "timebase": 60,
          "active": true,
          "owner": "Oregon DEQ",
          "ownerId": 1,
          "regionId": 1,
          "monitors": [
            {
              "channelId": 27,
              "name": "OZONE",
              "alias": null,
              "description": null,
              "active": true,
              "typeId": 11,
              "pollutantId": 1,
              "units": "ppb",
              "unitID": 640,
              "mapView": true,
              "isIndex": true,
              "PollutantCategory": 1,
              "NumericFormat": "0",
              "LowRange": 0,
              "HighRange": 250,
              "state": 0,
              "PctValid": 75,
              "MonitorTitle": "Ozone",
              "MON_StartDate": "05/03/2018 01:30:00 PM",
              "MON_EndDate": "12/31/9999 11:59:59 PM"
            }
          ],
          "StationTarget": "",
          "TargetId": 0,
          "County": "Multnomah",
          "city": "Portland",
          "address": "SE Lafayette St",
          "timeBases": [60, 1440],
          "additionalTimebases": null,
          "isNonContinuous": "false",
          "mapView": true,
          "aqiView": true,
          "mobile": false,
          "AQSCODE": "410510080"
        }
      ]
    }"#
}

/// Structurally invalid catalog: the second region has no `stations`
/// key at all (as opposed to an empty array), which is a schema
/// violation rather than tolerated missing data.
pub(crate) fn fixture_catalog_missing_stations_key_json() -> &'static str {
    r#"[
      { "regionId": 1, "name": "Portland Metro", "stations": [] },
      { "regionId": 2, "name": "Willamette Valley" }
    ]"#
}

/// Catalog whose one monitor carries a date in the wrong format.
pub(crate) fn fixture_catalog_bad_date_json() -> &'static str {
    r#"[
      {
        "regionId": 1,
        "name": "Portland Metro",
        "stations": [
          {
            "stationId": 2,
            "name": "Portland SE Lafayette",
            "monitors": [
              { "channelId": 27, "name": "OZONE", "MON_StartDate": "2018-05-03 13:30:00" }
            ]
          }
        ]
      }
    ]"#
}

/// Station id 7 appears in two regions with different names; the
/// name-index derivation resolves to the later occurrence.
pub(crate) fn fixture_catalog_duplicate_station_json() -> &'static str {
    r#"[
      {
        "regionId": 1,
        "name": "Portland Metro",
        "stations": [ { "stationId": 7, "name": "Sauvie Island" } ]
      },
      {
        "regionId": 2,
        "name": "North Coast",
        "stations": [ { "stationId": 7, "name": "Sauvie Island (relocated)" } ]
      }
    ]"#
}

/// Two hourly samples from the SE Lafayette data endpoint, ozone and
/// PM2.5 channels each.
pub(crate) fn fixture_timeseries_json() -> &'static str {
    r#"{
      "data": [
        {
          "datetime": "2024-01-01T00:00:00-08:00",
          "channels": [
            { "value_date": null, "status": 1, "value": 31.2, "valid": true, "id": 27, "units": "ppb", "name": "OZONE" },
            { "value_date": null, "status": 1, "value": 4.7, "valid": true, "id": 36, "units": "ug/m3", "name": "PM2.5 Est" }
          ]
        },
        {
          "datetime": "2024-01-01T01:00:00-08:00",
          "channels": [
            { "value_date": null, "status": 1, "value": 29.8, "valid": true, "id": 27, "units": "ppb", "name": "OZONE" },
            { "value_date": null, "status": 0, "value": null, "valid": false, "id": 36, "units": "ug/m3", "name": "PM2.5 Est" }
          ]
        }
      ]
    }"#
}
