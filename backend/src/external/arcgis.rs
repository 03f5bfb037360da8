//! ArcGIS REST client for geocoding and route solving
//!
//! Both operations are payload reshaping around one outbound call; no
//! decision logic lives here.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{AppError, AppResult};

/// A geographic point in WGS 84
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
}

/// One polygon barrier ring: a closed sequence of [x, y] pairs
pub type BarrierRing = Vec<[f64; 2]>;

/// ArcGIS geocode/route client
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: Client,
    geocode_url: String,
    route_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    candidates: Vec<GeocodeCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeocodeCandidate {
    location: GeoPoint,
}

impl GeoClient {
    /// Create a new GeoClient with a bounded request timeout
    pub fn new(
        geocode_url: impl Into<String>,
        route_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            geocode_url: geocode_url.into(),
            route_url: route_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Look up a single-line address, returning the best candidate only
    pub async fn geocode(&self, address: &str) -> AppResult<GeoPoint> {
        let response = self
            .client
            .get(&self.geocode_url)
            .query(&[
                ("f", "json"),
                ("singleLine", address),
                ("maxLocations", "1"),
                ("token", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::GeocodeFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::GeocodeFailed(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let data: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| AppError::GeocodeFailed(e.to_string()))?;

        match data.candidates.into_iter().next() {
            Some(candidate) => Ok(candidate.location),
            None => Err(AppError::AddressNotFound),
        }
    }

    /// Solve a two-stop route, optionally around polygon barriers.
    ///
    /// The provider's JSON response is passed through untouched.
    pub async fn solve_route(
        &self,
        stops: &[GeoPoint],
        barriers: Option<&[BarrierRing]>,
    ) -> AppResult<serde_json::Value> {
        let mut form: Vec<(&str, String)> = vec![
            ("stops", build_stops(stops).to_string()),
            ("returnRoutes", "true".to_string()),
            ("f", "json".to_string()),
            ("token", self.api_key.clone()),
        ];
        if let Some(barriers) = barriers {
            form.push(("polygonBarriers", build_barriers(barriers).to_string()));
        }

        let response = self
            .client
            .post(&self.route_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::RouteFailed(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| AppError::RouteFailed(e.to_string()))?;

        // The solve endpoint answers HTML on some failures; only JSON is
        // forwarded to callers.
        serde_json::from_str(&text)
            .map_err(|_| AppError::RouteFailed("provider returned non-JSON".to_string()))
    }
}

/// Stops as named point features (P0, P1, ...) in WGS 84
fn build_stops(stops: &[GeoPoint]) -> serde_json::Value {
    json!({
        "features": stops
            .iter()
            .enumerate()
            .map(|(i, p)| {
                json!({
                    "geometry": {
                        "x": p.x,
                        "y": p.y,
                        "spatialReference": { "wkid": 4326 },
                    },
                    "attributes": { "Name": format!("P{}", i) },
                })
            })
            .collect::<Vec<_>>(),
        "spatialReference": { "wkid": 4326 },
    })
}

/// Barriers as named polygon features (B0, B1, ...)
fn build_barriers(barriers: &[BarrierRing]) -> serde_json::Value {
    json!({
        "features": barriers
            .iter()
            .enumerate()
            .map(|(i, ring)| {
                json!({
                    "geometry": {
                        "rings": [ring],
                        "spatialReference": { "wkid": 4326 },
                    },
                    "attributes": { "Name": format!("B{}", i) },
                })
            })
            .collect::<Vec<_>>(),
    })
}


#[cfg(test)]
mod client_tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GeoClient {
        GeoClient::new(
            format!("{}/geocode", server.uri()),
            format!("{}/route", server.uri()),
            "test-key",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_geocode_returns_first_candidate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .and(query_param("singleLine", "台北車站"))
            .and(query_param("maxLocations", "1"))
            .and(query_param("token", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    { "location": { "x": 121.517, "y": 25.047 } },
                ]
            })))
            .mount(&server)
            .await;

        let location = client_for(&server).geocode("台北車站").await.unwrap();
        assert_eq!(
            location,
            GeoPoint {
                x: 121.517,
                y: 25.047
            }
        );
    }

    #[tokio::test]
    async fn test_geocode_no_candidates_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server).geocode("nowhere").await.unwrap_err();
        assert!(matches!(err, AppError::AddressNotFound));
    }

    #[tokio::test]
    async fn test_geocode_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geocode"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).geocode("anywhere").await.unwrap_err();
        assert!(matches!(err, AppError::GeocodeFailed(_)));
    }

    #[tokio::test]
    async fn test_solve_route_forwards_form_payload_and_response() {
        let server = MockServer::start().await;
        let solved = json!({ "routes": { "features": [] } });
        Mock::given(method("POST"))
            .and(path("/route"))
            .and(body_string_contains("returnRoutes=true"))
            .and(body_string_contains("token=test-key"))
            .and(body_string_contains("P0"))
            .and(body_string_contains("P1"))
            .and(body_string_contains("polygonBarriers"))
            .and(body_string_contains("B0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(solved.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let stops = [GeoPoint { x: 121.5, y: 25.0 }, GeoPoint { x: 121.3, y: 24.2 }];
        let barriers: Vec<BarrierRing> =
            vec![vec![[121.0, 24.0], [121.1, 24.0], [121.1, 24.1], [121.0, 24.0]]];
        let data = client_for(&server)
            .solve_route(&stops, Some(&barriers))
            .await
            .unwrap();

        assert_eq!(data, solved);
    }

    #[tokio::test]
    async fn test_solve_route_omits_barriers_when_absent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/route"))
            .and(body_string_contains("stops"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "routes": {} })))
            .mount(&server)
            .await;

        let stops = [GeoPoint { x: 121.5, y: 25.0 }, GeoPoint { x: 121.3, y: 24.2 }];
        let data = client_for(&server).solve_route(&stops, None).await.unwrap();
        assert!(data.get("routes").is_some());
    }

    #[tokio::test]
    async fn test_solve_route_rejects_non_json_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/route"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>error</html>"))
            .mount(&server)
            .await;

        let stops = [GeoPoint { x: 121.5, y: 25.0 }, GeoPoint { x: 121.3, y: 24.2 }];
        let err = client_for(&server)
            .solve_route(&stops, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::RouteFailed(_)));
    }
}
