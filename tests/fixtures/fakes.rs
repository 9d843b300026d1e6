//! Fake collaborators for planner tests.

#![allow(dead_code)]

use std::sync::Mutex;

use bin_route_planner::error::{RoutingError, StoreError};
use bin_route_planner::model::{AgentId, Stop};
use bin_route_planner::traits::{RouteMetrics, RoutingProvider, StopStore};
use bin_route_planner::GeoPoint;

/// Routing provider that returns fixed metrics and records every path.
#[derive(Debug, Default)]
pub struct RecordingProvider {
    pub response: Option<(f64, f64)>,
    pub calls: Mutex<Vec<Vec<GeoPoint>>>,
}

impl RecordingProvider {
    /// Succeeds with `meters` and `seconds`.
    pub fn ok(meters: f64, seconds: f64) -> Self {
        Self {
            response: Some((meters, seconds)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call, like an unreachable server.
    pub fn down() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl RoutingProvider for RecordingProvider {
    fn route_for(&self, path: &[GeoPoint]) -> Result<RouteMetrics, RoutingError> {
        self.calls.lock().unwrap().push(path.to_vec());
        match self.response {
            Some((distance_meters, duration_seconds)) => Ok(RouteMetrics {
                distance_meters,
                duration_seconds,
                geometry: None,
            }),
            None => Err(RoutingError::NoRoute("fake outage".to_string())),
        }
    }
}

/// Stop store whose backing database is down.
pub struct OfflineStopStore;

impl StopStore for OfflineStopStore {
    fn assigned_stops(&self, _agent_id: &AgentId) -> Result<Option<Vec<Stop>>, StoreError> {
        Err(StoreError::Unavailable("stop store offline".to_string()))
    }
}
