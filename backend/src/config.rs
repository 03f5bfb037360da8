//! Configuration management for the Trip Weather Advisory service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with TWA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Forecast provider configuration
    pub forecast: ForecastConfig,

    /// ArcGIS geocode/route configuration
    pub arcgis: ArcgisConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Open-Meteo forecast endpoint
    pub endpoint: String,

    /// Outbound request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArcgisConfig {
    /// World geocoding service endpoint
    pub geocode_endpoint: String,

    /// World route solve endpoint
    pub route_endpoint: String,

    /// API key sent as the `token` parameter
    pub api_key: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("TWA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("forecast.endpoint", "https://api.open-meteo.com/v1/forecast")?
            .set_default("forecast.timeout_seconds", 10)?
            .set_default(
                "arcgis.geocode_endpoint",
                "https://geocode-api.arcgis.com/arcgis/rest/services/World/GeocodeServer/findAddressCandidates",
            )?
            .set_default(
                "arcgis.route_endpoint",
                "https://route.arcgis.com/arcgis/rest/services/World/Route/NAServer/Route_World/solve",
            )?
            .set_default("arcgis.api_key", "")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (TWA_ prefix)
            .add_source(
                Environment::with_prefix("TWA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
