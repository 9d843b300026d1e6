//! bin-route-planner core
//!
//! Orders a driver's assigned collection points into a depot-to-depot tour,
//! asks a road-routing provider for real travel metrics, and records the trip.

pub mod error;
pub mod config;
pub mod geo;
pub mod model;
pub mod traits;
pub mod sequencer;
pub mod osrm;
pub mod polyline;
pub mod assembler;
pub mod recorder;
pub mod planner;
pub mod memory;

pub use config::PlannerConfig;
pub use error::{PlanError, RoutingError, StoreError};
pub use geo::GeoPoint;
pub use model::{AgentId, AgentIdentity, Role, Stop, StopCode, Trip, TripStatus, TripSummary};
pub use planner::{RoutePlan, RoutePlanner};
