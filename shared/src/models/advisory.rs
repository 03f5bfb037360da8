//! Risk vocabulary and advisory results

use serde::{Deserialize, Serialize};

use crate::models::forecast::HourlySample;
use crate::models::location::LocationCategory;

/// Three-tier road-condition risk
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn message_en(&self) -> &'static str {
        match self {
            RiskLevel::High => "High risk",
            RiskLevel::Medium => "Medium risk",
            RiskLevel::Low => "Low risk",
        }
    }

    pub fn message_zh(&self) -> &'static str {
        match self {
            RiskLevel::High => "高風險",
            RiskLevel::Medium => "中風險",
            RiskLevel::Low => "低風險",
        }
    }
}

/// Traffic-light-style severity indicator shown to users
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryColor {
    Gray,
    Red,
    Orange,
    Green,
}

impl From<RiskLevel> for AdvisoryColor {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => AdvisoryColor::Red,
            RiskLevel::Medium => AdvisoryColor::Orange,
            RiskLevel::Low => AdvisoryColor::Green,
        }
    }
}

/// One fired classification rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskFinding {
    /// Mountain: temperature below freezing
    FrozenPipes,
    /// Mountain: visibility under 200 m
    DenseFog,
    /// Mountain: precipitation probability over 70 %
    HighRainProbability,
    /// Mountain: nonzero snowfall, amount in mm/hr
    Snowfall { millimetres_per_hour: f64 },
    /// Road: the three-tier condition risk
    RoadCondition { level: RiskLevel },
}

impl RiskFinding {
    pub fn message_en(&self) -> String {
        match self {
            RiskFinding::FrozenPipes => "Risk of frozen water pipes".to_string(),
            RiskFinding::DenseFog => "Risk of dense fog".to_string(),
            RiskFinding::HighRainProbability => {
                "High chance of rain; bring rain gear or consider postponing the trip".to_string()
            }
            RiskFinding::Snowfall {
                millimetres_per_hour,
            } => format!(
                "Expected snowfall of {} mm/hr; watch for icy or closed roads",
                millimetres_per_hour
            ),
            RiskFinding::RoadCondition { level } => level.message_en().to_string(),
        }
    }

    pub fn message_zh(&self) -> String {
        match self {
            RiskFinding::FrozenPipes => "水管凍結風險".to_string(),
            RiskFinding::DenseFog => "濃霧風險".to_string(),
            RiskFinding::HighRainProbability => {
                "降雨機率偏高，建議備雨具或延後行程".to_string()
            }
            RiskFinding::Snowfall {
                millimetres_per_hour,
            } => format!(
                "預計降雪量為 {} mm/hr，請注意道路結冰或封閉情況",
                millimetres_per_hour
            ),
            RiskFinding::RoadCondition { level } => level.message_zh().to_string(),
        }
    }
}

/// Mountain findings: independent conditions, appended in rule order
pub fn classify_mountain(sample: &HourlySample) -> Vec<RiskFinding> {
    let mut risks = Vec::new();

    if sample.temperature < 0.0 {
        risks.push(RiskFinding::FrozenPipes);
    }
    if sample.visibility < 200.0 {
        risks.push(RiskFinding::DenseFog);
    }
    if sample.precipitation_probability > 70.0 {
        risks.push(RiskFinding::HighRainProbability);
    }
    if sample.snowfall > 0.0 {
        risks.push(RiskFinding::Snowfall {
            millimetres_per_hour: sample.snowfall,
        });
    }

    risks
}

/// Road three-tier risk: mutually exclusive rules, first match wins.
///
/// The rule order and the exact operators are load-bearing; boundary
/// values classify differently if either is changed.
pub fn classify_road(sample: &HourlySample) -> RiskLevel {
    if sample.temperature < 0.0 && (sample.dew_point < 0.0 || sample.relative_humidity >= 70.0) {
        RiskLevel::High
    } else if sample.temperature > 5.0
        || sample.dew_point > 0.0
        || sample.relative_humidity < 70.0
    {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    }
}

/// Advisory for one (location, date) query
///
/// Constructed fresh per query and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub temperature: f64,
    pub humidity: f64,
    pub rain_prob: f64,
    pub rain: f64,
    pub snowfall: f64,
    pub visibility: f64,
    pub dew_point: f64,
    /// Fired rules, in rule-evaluation order
    pub risks: Vec<RiskFinding>,
    /// Populated only for road sites
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_risk: Option<RiskLevel>,
    pub location_type: LocationCategory,
    pub traffic_light: AdvisoryColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(temperature: f64, dew_point: f64, relative_humidity: f64) -> HourlySample {
        HourlySample {
            temperature,
            relative_humidity,
            precipitation_probability: 0.0,
            rain: 0.0,
            snowfall: 0.0,
            visibility: 10000.0,
            dew_point,
        }
    }

    #[test]
    fn test_mountain_all_rules_fire_in_order() {
        let risks = classify_mountain(&HourlySample {
            temperature: -1.0,
            relative_humidity: 90.0,
            precipitation_probability: 80.0,
            rain: 0.5,
            snowfall: 2.0,
            visibility: 150.0,
            dew_point: -2.0,
        });
        assert_eq!(
            risks,
            vec![
                RiskFinding::FrozenPipes,
                RiskFinding::DenseFog,
                RiskFinding::HighRainProbability,
                RiskFinding::Snowfall {
                    millimetres_per_hour: 2.0
                },
            ]
        );
    }

    #[test]
    fn test_mountain_thresholds_are_strict() {
        // Values sitting exactly on a threshold do not fire.
        let risks = classify_mountain(&HourlySample {
            temperature: 0.0,
            relative_humidity: 50.0,
            precipitation_probability: 70.0,
            rain: 0.0,
            snowfall: 0.0,
            visibility: 200.0,
            dew_point: 0.0,
        });
        assert!(risks.is_empty());
    }

    #[test]
    fn test_road_high_risk() {
        assert_eq!(classify_road(&sample(-2.0, -3.0, 75.0)), RiskLevel::High);
        // Humidity alone satisfies the disjunction.
        assert_eq!(classify_road(&sample(-1.0, 2.0, 70.0)), RiskLevel::High);
    }

    #[test]
    fn test_road_rule_order_beats_conjunction() {
        // temperature > 5 fires rule 2 even with freezing dew point and
        // saturated air.
        assert_eq!(classify_road(&sample(6.0, -5.0, 90.0)), RiskLevel::Low);
    }

    #[test]
    fn test_road_medium_band() {
        assert_eq!(classify_road(&sample(3.0, -1.0, 85.0)), RiskLevel::Medium);
        // Exact boundary values miss both rule 1 and rule 2.
        assert_eq!(classify_road(&sample(0.0, 0.0, 70.0)), RiskLevel::Medium);
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(AdvisoryColor::from(RiskLevel::High), AdvisoryColor::Red);
        assert_eq!(AdvisoryColor::from(RiskLevel::Medium), AdvisoryColor::Orange);
        assert_eq!(AdvisoryColor::from(RiskLevel::Low), AdvisoryColor::Green);
    }

    #[test]
    fn test_snowfall_message_embeds_amount() {
        let finding = RiskFinding::Snowfall {
            millimetres_per_hour: 2.5,
        };
        assert!(finding.message_zh().contains("2.5 mm/hr"));
        assert!(finding.message_en().contains("2.5 mm/hr"));
    }

    #[test]
    fn test_finding_serialization_tags() {
        let json = serde_json::to_value(RiskFinding::DenseFog).unwrap();
        assert_eq!(json["kind"], "dense_fog");

        let json = serde_json::to_value(RiskFinding::RoadCondition {
            level: RiskLevel::High,
        })
        .unwrap();
        assert_eq!(json["kind"], "road_condition");
        assert_eq!(json["level"], "high");
    }
}
