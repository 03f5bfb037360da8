//! Error handling for the Trip Weather Advisory service
//!
//! Provides consistent error responses in English and Traditional Chinese

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Advisory errors
    #[error("unknown location code: {0}")]
    UnknownLocation(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    // Forecast provider errors
    #[error("forecast service unavailable: {0}")]
    ForecastUnavailable(String),

    #[error("malformed forecast data: {0}")]
    MalformedForecast(String),

    // Geocode/route proxy errors
    #[error("address is required")]
    MissingAddress,

    #[error("no matching place found")]
    AddressNotFound,

    #[error("route request must contain exactly two stops")]
    InvalidStops,

    #[error("geocode request failed: {0}")]
    GeocodeFailed(String),

    #[error("route solve failed: {0}")]
    RouteFailed(String),

    // Internal errors
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_zh: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::UnknownLocation(code) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "UNKNOWN_LOCATION".to_string(),
                    message_en: format!("Unknown location code: {}", code),
                    message_zh: "查無地點".to_string(),
                },
            ),
            AppError::InvalidDate(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_DATE".to_string(),
                    message_en: format!("Invalid date: {}", msg),
                    message_zh: "日期格式錯誤".to_string(),
                },
            ),
            AppError::ForecastUnavailable(cause) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "FORECAST_UNAVAILABLE".to_string(),
                    message_en: format!(
                        "Weather data is temporarily unavailable, try again later ({})",
                        cause
                    ),
                    message_zh: format!("無法取得氣象資料，請稍後再試。({})", cause),
                },
            ),
            AppError::MalformedForecast(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "MALFORMED_FORECAST".to_string(),
                    message_en: format!("Malformed forecast data: {}", msg),
                    message_zh: "氣象資料格式錯誤".to_string(),
                },
            ),
            AppError::MissingAddress => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "MISSING_ADDRESS".to_string(),
                    message_en: "An address is required".to_string(),
                    message_zh: "請輸入地址".to_string(),
                },
            ),
            AppError::AddressNotFound => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "ADDRESS_NOT_FOUND".to_string(),
                    message_en: "No matching place found".to_string(),
                    message_zh: "找不到地點".to_string(),
                },
            ),
            AppError::InvalidStops => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_STOPS".to_string(),
                    message_en: "Exactly two stops are required".to_string(),
                    message_zh: "請傳入兩個地點".to_string(),
                },
            ),
            AppError::GeocodeFailed(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "GEOCODE_FAILED".to_string(),
                    message_en: format!("Geocoding failed: {}", msg),
                    message_zh: "地理編碼錯誤".to_string(),
                },
            ),
            AppError::RouteFailed(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "ROUTE_FAILED".to_string(),
                    message_en: format!("Route solve failed: {}", msg),
                    message_zh: "路線查詢失敗".to_string(),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_zh: "設定錯誤".to_string(),
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_zh: "伺服器內部錯誤".to_string(),
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
