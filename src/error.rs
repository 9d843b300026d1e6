//! Error types for route construction.
//!
//! Request errors are caller-correctable, store errors are fatal for the
//! request, and routing errors never leave the assembler.

use thiserror::Error;

use crate::model::AgentId;

/// Errors surfaced by [`crate::planner::RoutePlanner::build_route`].
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("no dustbins assigned to agent {0}")]
    NoAssignedStops(AgentId),

    #[error("agent {0} does not hold the driver role")]
    Forbidden(AgentId),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl PlanError {
    /// True for errors the caller can correct (unknown agent, nothing
    /// assigned, wrong role). Everything else is a server fault.
    pub fn is_request_error(&self) -> bool {
        !matches!(self, PlanError::Store(_))
    }
}

/// Failure of a collaborator store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("record conflict: {0}")]
    Conflict(String),
}

/// Failure of the external routing provider. Absorbed by the assembler.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned no route (code {0})")]
    NoRoute(String),

    #[error("path needs at least two points, got {0}")]
    PathTooShort(usize),
}

/// Rejected stop record.
#[derive(Debug, Error, PartialEq)]
pub enum StopError {
    #[error("fill level {0} outside 0..=100")]
    FillLevel(u8),

    #[error("priority must be at least 1")]
    Priority,

    #[error("stop code must not be empty")]
    EmptyCode,
}

/// Unusable configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
