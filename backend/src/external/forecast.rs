//! Forecast API client for fetching hourly weather data
//!
//! Integrates with the Open-Meteo forecast API, requesting one calendar
//! day of hourly data in the fixed Asia/Taipei timezone.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use shared::models::{taipei_offset, HourlySeries};
use shared::types::GpsCoordinates;

use crate::error::{AppError, AppResult};

/// Hourly fields requested from the provider, in series order
const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,precipitation_probability,snowfall,visibility,dew_point_2m,rain";

/// Timestamp format used by the provider when a named timezone is requested
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Forecast API client
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

/// Open-Meteo response envelope
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    hourly: Option<OpenMeteoHourly>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoHourly {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    relative_humidity_2m: Vec<f64>,
    precipitation_probability: Vec<f64>,
    snowfall: Vec<f64>,
    visibility: Vec<f64>,
    dew_point_2m: Vec<f64>,
    rain: Vec<f64>,
}

impl ForecastClient {
    /// Create a new ForecastClient with a bounded request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the hourly series for one coordinate and calendar date.
    ///
    /// Returns the validated series together with the raw response body;
    /// the raw body is retained for potential future use but not otherwise
    /// consumed.
    pub async fn fetch_hourly(
        &self,
        coordinates: GpsCoordinates,
        date: NaiveDate,
    ) -> AppResult<(HourlySeries, serde_json::Value)> {
        let date_param = date.format("%Y-%m-%d").to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", coordinates.latitude.to_string().as_str()),
                ("longitude", coordinates.longitude.to_string().as_str()),
                ("hourly", HOURLY_FIELDS),
                ("timezone", "Asia/Taipei"),
                ("start_date", date_param.as_str()),
                ("end_date", date_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::ForecastUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::ForecastUnavailable(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::ForecastUnavailable(e.to_string()))?;

        let series = parse_series(&raw)?;
        Ok((series, raw))
    }
}

/// Extract and validate the hourly series from a provider response body
fn parse_series(raw: &serde_json::Value) -> AppResult<HourlySeries> {
    let parsed: OpenMeteoResponse = serde_json::from_value(raw.clone())
        .map_err(|e| AppError::MalformedForecast(e.to_string()))?;

    let hourly = parsed
        .hourly
        .ok_or_else(|| AppError::MalformedForecast("missing hourly block".to_string()))?;

    let tz = taipei_offset();
    let timestamps = hourly
        .time
        .iter()
        .map(|t| {
            NaiveDateTime::parse_from_str(t, TIME_FORMAT)
                .ok()
                .and_then(|naive| naive.and_local_timezone(tz).single())
                .ok_or_else(|| AppError::MalformedForecast(format!("bad timestamp: {}", t)))
        })
        .collect::<AppResult<Vec<_>>>()?;

    HourlySeries::new(
        timestamps,
        hourly.temperature_2m,
        hourly.relative_humidity_2m,
        hourly.precipitation_probability,
        hourly.rain,
        hourly.snowfall,
        hourly.visibility,
        hourly.dew_point_2m,
    )
    .map_err(|e| AppError::MalformedForecast(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_series_ok() {
        let raw = json!({
            "hourly": {
                "time": ["2024-01-15T00:00", "2024-01-15T01:00"],
                "temperature_2m": [3.1, 2.8],
                "relative_humidity_2m": [80.0, 82.0],
                "precipitation_probability": [10.0, 20.0],
                "snowfall": [0.0, 0.0],
                "visibility": [24000.0, 18000.0],
                "dew_point_2m": [0.5, 0.2],
                "rain": [0.0, 0.1],
            }
        });

        let series = parse_series(&raw).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.timestamps[1].offset().local_minus_utc(), 8 * 3600);
        assert_eq!(series.temperature, vec![3.1, 2.8]);
    }

    #[test]
    fn test_parse_series_missing_hourly() {
        let raw = json!({ "latitude": 24.15 });
        let err = parse_series(&raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedForecast(_)));
    }

    #[test]
    fn test_parse_series_empty_time() {
        let raw = json!({
            "hourly": {
                "time": [],
                "temperature_2m": [],
                "relative_humidity_2m": [],
                "precipitation_probability": [],
                "snowfall": [],
                "visibility": [],
                "dew_point_2m": [],
                "rain": [],
            }
        });

        let err = parse_series(&raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedForecast(_)));
    }

    #[test]
    fn test_parse_series_bad_timestamp() {
        let raw = json!({
            "hourly": {
                "time": ["not-a-time"],
                "temperature_2m": [1.0],
                "relative_humidity_2m": [1.0],
                "precipitation_probability": [1.0],
                "snowfall": [0.0],
                "visibility": [1.0],
                "dew_point_2m": [0.0],
                "rain": [0.0],
            }
        });

        let err = parse_series(&raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedForecast(_)));
    }
}
