//! In-memory stores.
//!
//! Reference implementations of [`StopStore`] and [`TripStore`] for tests
//! and single-process deployments. Safe to share across request threads.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::error::StoreError;
use crate::model::{AgentId, Stop, StopCode, Trip};
use crate::traits::{StopStore, TripStore};

/// Agents and the stops assigned to each.
#[derive(Debug, Default)]
pub struct InMemoryStopStore {
    assignments: Mutex<HashMap<AgentId, Vec<Stop>>>,
}

impl InMemoryStopStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an agent with no stops. No-op if already known.
    pub fn add_agent(&self, agent_id: AgentId) {
        lock(&self.assignments).entry(agent_id).or_default();
    }

    /// Assigns `stop` to `agent_id`, registering the agent if needed.
    ///
    /// Repeating an assignment to the same agent is a no-op and returns
    /// `false`. A stop may be assigned to several agents at once.
    pub fn assign(&self, agent_id: AgentId, stop: Stop) -> bool {
        let mut assignments = lock(&self.assignments);
        let stops = assignments.entry(agent_id).or_default();
        if stops.iter().any(|existing| existing.code() == stop.code()) {
            return false;
        }
        stops.push(stop);
        true
    }

    /// Removes a stop from every agent holding it.
    pub fn unassign(&self, code: &StopCode) -> Option<Stop> {
        let mut assignments = lock(&self.assignments);
        let mut removed = None;
        for stops in assignments.values_mut() {
            if let Some(position) = stops.iter().position(|stop| stop.code() == code) {
                removed = Some(stops.remove(position));
            }
        }
        removed
    }
}

impl StopStore for InMemoryStopStore {
    fn assigned_stops(&self, agent_id: &AgentId) -> Result<Option<Vec<Stop>>, StoreError> {
        Ok(lock(&self.assignments).get(agent_id).cloned())
    }
}

/// Append-only trip log with a switch to simulate an outage.
#[derive(Debug)]
pub struct InMemoryTripStore {
    trips: Mutex<Vec<Trip>>,
    available: AtomicBool,
}

impl Default for InMemoryTripStore {
    fn default() -> Self {
        Self {
            trips: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }
}

impl InMemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Snapshot of every stored trip, oldest first.
    pub fn trips(&self) -> Vec<Trip> {
        lock(&self.trips).clone()
    }

    pub fn trips_for(&self, agent_id: &AgentId) -> Vec<Trip> {
        lock(&self.trips)
            .iter()
            .filter(|trip| &trip.agent_id == agent_id)
            .cloned()
            .collect()
    }
}

impl TripStore for InMemoryTripStore {
    fn create(&self, trip: Trip) -> Result<Trip, StoreError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("trip store offline".to_string()));
        }
        let mut trips = lock(&self.trips);
        if trips.iter().any(|existing| existing.id == trip.id) {
            return Err(StoreError::Conflict(format!("trip {} already exists", trip.id)));
        }
        trips.push(trip.clone());
        Ok(trip)
    }
}

// A panic while holding the lock leaves the data itself intact.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
