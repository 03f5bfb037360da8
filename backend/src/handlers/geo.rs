//! HTTP handlers for the geocode/route proxy

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::external::arcgis::{BarrierRing, GeoPoint};
use crate::AppState;

/// Geocode request body
#[derive(Debug, Deserialize)]
pub struct GeocodeRequest {
    #[serde(default)]
    pub address: String,
}

/// Geocode response: the best candidate's coordinates
#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub location: GeoPoint,
}

/// Forward a single-line address lookup
pub async fn geocode(
    State(state): State<AppState>,
    Json(input): Json<GeocodeRequest>,
) -> AppResult<Json<GeocodeResponse>> {
    let address = input.address.trim();
    if address.is_empty() {
        return Err(AppError::MissingAddress);
    }

    let location = state.geo.geocode(address).await?;
    Ok(Json(GeocodeResponse { location }))
}

/// Route request body: exactly two stops, optional polygon barriers
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub stops: Vec<GeoPoint>,
    #[serde(default)]
    pub barriers: Option<Vec<BarrierRing>>,
}

/// Forward a two-stop route solve; the provider's JSON is passed through
pub async fn solve_route(
    State(state): State<AppState>,
    Json(input): Json<RouteRequest>,
) -> AppResult<Json<Value>> {
    if input.stops.len() != 2 {
        return Err(AppError::InvalidStops);
    }

    let data = state
        .geo
        .solve_route(&input.stops, input.barriers.as_deref())
        .await?;
    Ok(Json(data))
}
