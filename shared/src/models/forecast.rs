//! Hourly forecast series
//!
//! Index `i` of every parallel vector describes the instant `timestamps[i]`.
//! The constructor enforces that invariant; a series that fails it must not
//! reach classification.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The fixed UTC+8 offset every series timestamp carries.
///
/// The service pins Asia/Taipei as a plain offset; no DST rules apply.
pub fn taipei_offset() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("UTC+8 is a valid offset")
}

/// Validation failure for a fetched series
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("forecast series contains no timestamps")]
    Empty,
    #[error("field {field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// One day of hourly forecast data for a single coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    pub timestamps: Vec<DateTime<FixedOffset>>,
    pub temperature: Vec<f64>,
    pub relative_humidity: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
    pub rain: Vec<f64>,
    pub snowfall: Vec<f64>,
    pub visibility: Vec<f64>,
    pub dew_point: Vec<f64>,
}

/// The seven raw values at one aligned index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HourlySample {
    pub temperature: f64,
    pub relative_humidity: f64,
    pub precipitation_probability: f64,
    pub rain: f64,
    pub snowfall: f64,
    pub visibility: f64,
    pub dew_point: f64,
}

impl HourlySeries {
    /// Build a validated series from parallel vectors.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        timestamps: Vec<DateTime<FixedOffset>>,
        temperature: Vec<f64>,
        relative_humidity: Vec<f64>,
        precipitation_probability: Vec<f64>,
        rain: Vec<f64>,
        snowfall: Vec<f64>,
        visibility: Vec<f64>,
        dew_point: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        if timestamps.is_empty() {
            return Err(SeriesError::Empty);
        }
        let expected = timestamps.len();
        for (field, actual) in [
            ("temperature", temperature.len()),
            ("relative_humidity", relative_humidity.len()),
            ("precipitation_probability", precipitation_probability.len()),
            ("rain", rain.len()),
            ("snowfall", snowfall.len()),
            ("visibility", visibility.len()),
            ("dew_point", dew_point.len()),
        ] {
            if actual != expected {
                return Err(SeriesError::LengthMismatch {
                    field,
                    expected,
                    actual,
                });
            }
        }

        Ok(Self {
            timestamps,
            temperature,
            relative_humidity,
            precipitation_probability,
            rain,
            snowfall,
            visibility,
            dew_point,
        })
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Extract the sample at `index`. Panics only on an out-of-range index,
    /// which the alignment step cannot produce for a validated series.
    pub fn sample_at(&self, index: usize) -> HourlySample {
        HourlySample {
            temperature: self.temperature[index],
            relative_humidity: self.relative_humidity[index],
            precipitation_probability: self.precipitation_probability[index],
            rain: self.rain[index],
            snowfall: self.snowfall[index],
            visibility: self.visibility[index],
            dew_point: self.dew_point[index],
        }
    }
}
