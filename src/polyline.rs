//! Road geometry returned by the routing provider.
//!
//! OSRM is asked for `geometries=geojson`, so the route shape arrives as a
//! GeoJSON `LineString` with `[lng, lat]` positions. It is flipped to
//! `(lat, lng)` once, here, and kept decoded for map rendering.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A decoded route shape, in travel order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

/// GeoJSON geometry as OSRM emits it.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoJsonLineString {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

impl Polyline {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Converts a GeoJSON line. Returns `None` for any other geometry type.
    pub fn from_geojson(line: &GeoJsonLineString) -> Option<Self> {
        if line.kind != "LineString" {
            return None;
        }
        let points = line
            .coordinates
            .iter()
            .map(|&[lng, lat]| GeoPoint::new(lat, lng))
            .collect();
        Some(Self { points })
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_geojson_flips_axis_order() {
        let line: GeoJsonLineString = serde_json::from_str(
            r#"{"type":"LineString","coordinates":[[77.5946,12.9716],[77.6050,12.9756]]}"#,
        )
        .unwrap();
        let polyline = Polyline::from_geojson(&line).unwrap();
        assert_eq!(
            polyline.points(),
            &[GeoPoint::new(12.9716, 77.5946), GeoPoint::new(12.9756, 77.6050)]
        );
    }

    #[test]
    fn test_from_geojson_rejects_other_types() {
        let point = GeoJsonLineString {
            kind: "Point".to_string(),
            coordinates: vec![[77.5946, 12.9716]],
        };
        assert!(Polyline::from_geojson(&point).is_none());
    }

    #[test]
    fn test_empty_polyline() {
        assert!(Polyline::new(vec![]).is_empty());
    }
}
