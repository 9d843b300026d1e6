//! OSRM HTTP adapter for whole-trip road metrics.

use std::time::Duration;

use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::error::RoutingError;
use crate::geo::GeoPoint;
use crate::polyline::{GeoJsonLineString, Polyline};
use crate::traits::{RouteMetrics, RoutingProvider};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    /// Builds a client whose every request is bounded by `timeout_secs`.
    pub fn new(config: OsrmConfig) -> Result<Self, RoutingError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OsrmConfig {
        &self.config
    }

    /// `route` service URL for `path`, coordinates as `lng,lat;lng,lat;...`.
    pub fn route_url(&self, path: &[GeoPoint]) -> String {
        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coordinate_string(path)
        )
    }
}

/// Serializes a path in the provider's coordinate order.
pub fn coordinate_string(path: &[GeoPoint]) -> String {
    path.iter()
        .map(GeoPoint::to_lng_lat)
        .collect::<Vec<_>>()
        .join(";")
}

impl RoutingProvider for OsrmClient {
    fn route_for(&self, path: &[GeoPoint]) -> Result<RouteMetrics, RoutingError> {
        if path.len() < 2 {
            return Err(RoutingError::PathTooShort(path.len()));
        }

        let url = self.route_url(path);
        debug!(%url, "requesting OSRM route");

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())?;

        body.into_metrics()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    #[serde(default)]
    geometry: Option<RouteGeometry>,
}

/// Anything other than a GeoJSON line (an encoded polyline string, a
/// different overview setting) is dropped without failing the metrics.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RouteGeometry {
    Line(GeoJsonLineString),
    Other(IgnoredAny),
}

impl RouteGeometry {
    fn into_polyline(self) -> Option<Polyline> {
        match self {
            RouteGeometry::Line(line) => Polyline::from_geojson(&line),
            RouteGeometry::Other(_) => None,
        }
    }
}

impl OsrmRouteResponse {
    /// First route's metrics, or `NoRoute` when OSRM found none.
    pub(crate) fn into_metrics(self) -> Result<RouteMetrics, RoutingError> {
        if self.code != "Ok" {
            return Err(RoutingError::NoRoute(self.code));
        }
        let route = self
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::NoRoute(self.code))?;

        Ok(RouteMetrics {
            distance_meters: route.distance,
            duration_seconds: route.duration,
            geometry: route.geometry.and_then(RouteGeometry::into_polyline),
        })
    }
}
