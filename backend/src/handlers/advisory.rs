//! HTTP handlers for advisory queries

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::AdvisoryReport;
use crate::services::AdvisoryService;
use crate::AppState;

/// Query parameters for an advisory request
#[derive(Debug, Deserialize)]
pub struct AdvisoryQuery {
    pub location: String,
    pub date: String,
}

/// Advisory response: the report plus location metadata for display
#[derive(Debug, Serialize)]
pub struct AdvisoryResponse {
    pub location: String,
    pub location_name: String,
    pub date_display: String,
    pub map_url: String,
    #[serde(flatten)]
    pub report: AdvisoryReport,
}

/// Parse the query date. The date picker submits `YYYY/MM/DD`; the ISO
/// form is accepted as well.
fn parse_query_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y/%m/%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| AppError::InvalidDate(raw.to_string()))
}

/// Run the risk assessment for one location and date
pub async fn get_advisory(
    State(state): State<AppState>,
    Query(query): Query<AdvisoryQuery>,
) -> AppResult<Json<AdvisoryResponse>> {
    let date = parse_query_date(&query.date)?;

    let service = AdvisoryService::new(state.forecast.clone());
    let advisory = service.assess(&query.location, date).await?;

    Ok(Json(AdvisoryResponse {
        location: advisory.location.to_string(),
        location_name: advisory.location.display_name().to_string(),
        date_display: date.format("%m/%d").to_string(),
        map_url: advisory.location.map_url().to_string(),
        report: advisory.report,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_date_slash_form() {
        let date = parse_query_date("2024/01/15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_query_date_iso_form() {
        let date = parse_query_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_query_date_rejects_garbage() {
        assert!(parse_query_date("15/01/2024").is_err());
        assert!(parse_query_date("2024-02-30").is_err());
        assert!(parse_query_date("").is_err());
    }
}
