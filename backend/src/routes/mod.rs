//! Route definitions for the Trip Weather Advisory service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Advisory query
        .merge(advisory_routes())
        // Geocode/route proxy
        .nest("/api", geo_routes())
}

/// Advisory routes
fn advisory_routes() -> Router<AppState> {
    Router::new().route("/result", get(handlers::get_advisory))
}

/// Geocode and route-solve proxy routes
fn geo_routes() -> Router<AppState> {
    Router::new()
        .route("/geocode", post(handlers::geocode))
        .route("/route", post(handlers::solve_route))
}
