//! External API integrations

pub mod arcgis;
pub mod forecast;

pub use arcgis::GeoClient;
pub use forecast::ForecastClient;
