//! Trip persistence.

use tracing::{error, info};

use crate::error::StoreError;
use crate::model::{AgentId, StopCode, Trip, TripSummary};
use crate::traits::TripStore;

#[derive(Debug, Clone)]
pub struct TripRecorder<T> {
    store: T,
}

impl<T: TripStore> TripRecorder<T> {
    pub fn new(store: T) -> Self {
        Self { store }
    }

    /// Creates one `pending` trip. No retry; a store failure is returned
    /// as-is and nothing is left behind.
    pub fn record(
        &self,
        agent_id: &AgentId,
        visit_order: Vec<StopCode>,
        summary: TripSummary,
    ) -> Result<Trip, StoreError> {
        let trip = Trip::pending(agent_id.clone(), visit_order, summary);
        match self.store.create(trip) {
            Ok(trip) => {
                info!(trip_id = %trip.id, agent_id = %trip.agent_id, stops = trip.visit_order.len(), "trip recorded");
                Ok(trip)
            }
            Err(err) => {
                error!(error = %err, agent_id = %agent_id, "failed to record trip");
                Err(err)
            }
        }
    }
}
