//! Trip assembly: wraps a tour with the depot and attaches road metrics.
//!
//! The provider is optional in practice. Any failure (unreachable, timeout,
//! bad status, no route) degrades to zero metrics; the visit order stands.

use tracing::{debug, warn};

use crate::geo::GeoPoint;
use crate::model::{PathPoint, Stop, StopCode, TripSummary};
use crate::polyline::Polyline;
use crate::traits::{RouteMetrics, RoutingProvider};

/// A depot-to-depot path with its summary, ready to record and return.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledTrip {
    /// Depot, the stops in tour order, depot again.
    pub path: Vec<PathPoint>,
    pub visit_order: Vec<StopCode>,
    pub summary: TripSummary,
    /// Road geometry, when the provider returned one.
    pub geometry: Option<Polyline>,
}

#[derive(Debug, Clone)]
pub struct TripAssembler<P> {
    depot: GeoPoint,
    provider: P,
}

impl<P: RoutingProvider> TripAssembler<P> {
    pub fn new(depot: GeoPoint, provider: P) -> Self {
        Self { depot, provider }
    }

    pub fn depot(&self) -> GeoPoint {
        self.depot
    }

    /// Never fails: provider errors are logged and mapped to zero metrics.
    pub fn assemble(&self, tour: &[Stop]) -> AssembledTrip {
        let path = self.build_path(tour);
        let visit_order: Vec<StopCode> = tour.iter().map(|stop| stop.code().clone()).collect();
        let coordinates: Vec<GeoPoint> = path.iter().map(PathPoint::location).collect();

        let (summary, geometry) = match self.provider.route_for(&coordinates) {
            Ok(metrics) => {
                let summary = summarize(&metrics);
                debug!(
                    distance_km = summary.total_distance_km,
                    duration_min = summary.total_duration_min,
                    "road metrics received"
                );
                (summary, metrics.geometry)
            }
            Err(err) => {
                warn!(error = %err, stops = tour.len(), "routing provider failed, using zero metrics");
                (TripSummary::default(), None)
            }
        };

        AssembledTrip {
            path,
            visit_order,
            summary,
            geometry,
        }
    }

    fn build_path(&self, tour: &[Stop]) -> Vec<PathPoint> {
        let mut path = Vec::with_capacity(tour.len() + 2);
        path.push(PathPoint::depot(self.depot));
        path.extend(tour.iter().map(PathPoint::from));
        path.push(PathPoint::depot(self.depot));
        path
    }
}

/// Converts provider units: meters to km rounded to 2 places, seconds to
/// minutes rounded up.
pub fn summarize(metrics: &RouteMetrics) -> TripSummary {
    TripSummary {
        total_distance_km: round_km(metrics.distance_meters / 1000.0),
        total_duration_min: ceil_minutes(metrics.duration_seconds),
    }
}

fn round_km(km: f64) -> f64 {
    if !km.is_finite() || km <= 0.0 {
        return 0.0;
    }
    (km * 100.0).round() / 100.0
}

fn ceil_minutes(seconds: f64) -> u32 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    // Saturates at u32::MAX for absurd inputs.
    (seconds / 60.0).ceil() as u32
}
