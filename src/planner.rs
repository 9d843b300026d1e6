//! The "build route for agent" operation.
//!
//! Flow: role check -> assigned stops -> sequence -> assemble (provider
//! call) -> record -> respond. Request errors are raised before the provider
//! is contacted; only a store failure aborts after that.

use serde::Serialize;
use tracing::{debug, info};

use crate::assembler::TripAssembler;
use crate::config::PlannerConfig;
use crate::error::{PlanError, RoutingError};
use crate::model::{AgentIdentity, PathPoint, Role, StopCode, TripId};
use crate::osrm::OsrmClient;
use crate::polyline::Polyline;
use crate::recorder::TripRecorder;
use crate::sequencer::{self, ScoringOptions};
use crate::traits::{RoutingProvider, StopStore, TripStore};

/// What the caller gets back for one successful request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub path: Vec<PathPoint>,
    pub visit_order: Vec<StopCode>,
    pub total_distance_km: f64,
    pub total_duration_min: u32,
    pub trip_id: TripId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Polyline>,
}

/// Holds no per-request state; one instance can serve concurrent requests
/// as long as the collaborators can.
#[derive(Debug, Clone)]
pub struct RoutePlanner<S, T, P> {
    stops: S,
    assembler: TripAssembler<P>,
    recorder: TripRecorder<T>,
    scoring: ScoringOptions,
}

impl<S, T> RoutePlanner<S, T, OsrmClient>
where
    S: StopStore,
    T: TripStore,
{
    /// Planner backed by an OSRM client built from `config`.
    pub fn with_osrm(config: &PlannerConfig, stops: S, trips: T) -> Result<Self, RoutingError> {
        let provider = OsrmClient::new(config.osrm.clone())?;
        Ok(Self::new(config, stops, trips, provider))
    }
}

impl<S, T, P> RoutePlanner<S, T, P>
where
    S: StopStore,
    T: TripStore,
    P: RoutingProvider,
{
    pub fn new(config: &PlannerConfig, stops: S, trips: T, provider: P) -> Self {
        Self {
            stops,
            assembler: TripAssembler::new(config.depot, provider),
            recorder: TripRecorder::new(trips),
            scoring: config.scoring,
        }
    }

    pub fn build_route(&self, identity: &AgentIdentity) -> Result<RoutePlan, PlanError> {
        let agent_id = &identity.id;
        info!(agent_id = %agent_id, "building route");

        if identity.role != Role::Driver {
            return Err(PlanError::Forbidden(agent_id.clone()));
        }

        let stops = self
            .stops
            .assigned_stops(agent_id)?
            .ok_or_else(|| PlanError::AgentNotFound(agent_id.clone()))?;
        if stops.is_empty() {
            return Err(PlanError::NoAssignedStops(agent_id.clone()));
        }

        let tour = sequencer::sequence(&stops, self.assembler.depot(), &self.scoring);
        debug!(
            agent_id = %agent_id,
            order = ?tour.iter().map(|stop| stop.code().as_str()).collect::<Vec<_>>(),
            "stops sequenced"
        );

        let assembled = self.assembler.assemble(&tour);
        let trip = self
            .recorder
            .record(agent_id, assembled.visit_order.clone(), assembled.summary)?;

        info!(
            agent_id = %agent_id,
            trip_id = %trip.id,
            distance_km = trip.total_distance_km,
            duration_min = trip.total_duration_min,
            "route built"
        );

        Ok(RoutePlan {
            path: assembled.path,
            visit_order: assembled.visit_order,
            total_distance_km: trip.total_distance_km,
            total_duration_min: trip.total_duration_min,
            trip_id: trip.id,
            geometry: assembled.geometry,
        })
    }
}
