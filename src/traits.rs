//! Collaborator seams consumed by the planner.
//!
//! These are intentionally narrow. Concrete apps implement them over their
//! own databases and HTTP clients; `memory` has reference implementations.

use crate::error::{RoutingError, StoreError};
use crate::geo::GeoPoint;
use crate::model::{AgentId, Stop, Trip};
use crate::polyline::Polyline;

/// Provides the collection points assigned to an agent.
pub trait StopStore {
    /// `Ok(None)` when the agent is unknown; `Ok(Some(vec![]))` when the
    /// agent exists but has nothing assigned.
    fn assigned_stops(&self, agent_id: &AgentId) -> Result<Option<Vec<Stop>>, StoreError>;
}

/// Append-only persistence for trips.
pub trait TripStore {
    /// Stores the trip whole or not at all.
    fn create(&self, trip: Trip) -> Result<Trip, StoreError>;
}

/// Raw road metrics for a path, in provider units.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMetrics {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub geometry: Option<Polyline>,
}

/// Converts an ordered coordinate path into road distance and duration.
///
/// Implementations are expected to fail; callers must not abort on `Err`.
pub trait RoutingProvider {
    fn route_for(&self, path: &[GeoPoint]) -> Result<RouteMetrics, RoutingError>;
}

impl<T: StopStore + ?Sized> StopStore for &T {
    fn assigned_stops(&self, agent_id: &AgentId) -> Result<Option<Vec<Stop>>, StoreError> {
        (**self).assigned_stops(agent_id)
    }
}

impl<T: TripStore + ?Sized> TripStore for &T {
    fn create(&self, trip: Trip) -> Result<Trip, StoreError> {
        (**self).create(trip)
    }
}

impl<T: RoutingProvider + ?Sized> RoutingProvider for &T {
    fn route_for(&self, path: &[GeoPoint]) -> Result<RouteMetrics, RoutingError> {
        (**self).route_for(path)
    }
}
