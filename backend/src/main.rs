//! Trip Weather Advisory - Backend Server
//!
//! Hourly-forecast risk advisories for Taiwanese mountain sites and
//! cross-island highways, plus a geocode/route proxy for trip planning.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;

use external::{ForecastClient, GeoClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub forecast: ForecastClient,
    pub geo: GeoClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twa_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Trip Weather Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    // Outbound clients share one bounded timeout
    let timeout = Duration::from_secs(config.forecast.timeout_seconds);
    let forecast = ForecastClient::new(config.forecast.endpoint.clone(), timeout)?;
    let geo = GeoClient::new(
        config.arcgis.geocode_endpoint.clone(),
        config.arcgis.route_endpoint.clone(),
        config.arcgis.api_key.clone(),
        timeout,
    )?;

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        forecast,
        geo,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration: the map front-end calls the proxy cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Trip Weather Advisory API v1.0"
}
