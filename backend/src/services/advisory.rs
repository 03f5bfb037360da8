//! Risk assessment service
//!
//! Composes two stages connected by the hourly series value: fetch the
//! day's forecast, then align it to "now" and classify the selected
//! sample. The alignment and classification rules live in the shared
//! crate so they stay network-free and unit-testable.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use shared::alignment::{nearest_index, rounded_current_hour, target_instant};
use shared::models::{
    classify_mountain, classify_road, taipei_offset, AdvisoryColor, AdvisoryReport, HourlySeries,
    LocationCategory, LocationCode, RiskFinding,
};

use crate::error::{AppError, AppResult};
use crate::external::ForecastClient;

/// An advisory report together with the site it describes
#[derive(Debug, Clone)]
pub struct Advisory {
    pub location: LocationCode,
    pub report: AdvisoryReport,
}

/// Advisory service: location lookup, forecast fetch, alignment, classification
#[derive(Clone)]
pub struct AdvisoryService {
    forecast: ForecastClient,
}

impl AdvisoryService {
    pub fn new(forecast: ForecastClient) -> Self {
        Self { forecast }
    }

    /// Assess one (location, date) query.
    ///
    /// Unknown codes fail before any network call is made.
    pub async fn assess(&self, code: &str, date: NaiveDate) -> AppResult<Advisory> {
        let location: LocationCode = code
            .parse()
            .map_err(|_| AppError::UnknownLocation(code.to_string()))?;

        let (series, _raw) = self
            .forecast
            .fetch_hourly(location.coordinates(), date)
            .await?;

        let now = Utc::now().with_timezone(&taipei_offset());
        let report = build_report(location.category(), &series, now, date)?;

        tracing::debug!(
            location = %location,
            %date,
            risks = report.risks.len(),
            "advisory assessed"
        );

        Ok(Advisory { location, report })
    }
}

/// Align the series to `now` transplanted onto `date`, then classify the
/// selected sample by category.
pub fn build_report(
    category: LocationCategory,
    series: &HourlySeries,
    now: DateTime<FixedOffset>,
    date: NaiveDate,
) -> AppResult<AdvisoryReport> {
    let rounded = rounded_current_hour(now)
        .ok_or_else(|| AppError::InvalidDate("date conversion failed".to_string()))?;
    let target = target_instant(rounded, date)
        .ok_or_else(|| AppError::InvalidDate("date conversion failed".to_string()))?;
    let index = nearest_index(&series.timestamps, target)
        .ok_or_else(|| AppError::MalformedForecast("empty series".to_string()))?;
    let sample = series.sample_at(index);

    let (risks, overall_risk, traffic_light) = match category {
        LocationCategory::Mountain => (classify_mountain(&sample), None, AdvisoryColor::Gray),
        LocationCategory::Road => {
            let level = classify_road(&sample);
            (
                vec![RiskFinding::RoadCondition { level }],
                Some(level),
                AdvisoryColor::from(level),
            )
        }
    };

    Ok(AdvisoryReport {
        temperature: sample.temperature,
        humidity: sample.relative_humidity,
        rain_prob: sample.precipitation_probability,
        rain: sample.rain,
        snowfall: sample.snowfall,
        visibility: sample.visibility,
        dew_point: sample.dew_point,
        risks,
        overall_risk,
        location_type: category,
        traffic_light,
    })
}
