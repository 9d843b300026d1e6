//! Domain records shared by the planner and its collaborators.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StopError;
use crate::geo::GeoPoint;

/// Identifier of a field agent, owned by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable, system-unique code of a collection point (e.g. `BIN-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopCode(pub String);

impl StopCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Driver,
    Admin,
}

/// An authenticated caller as vouched for by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentIdentity {
    pub id: AgentId,
    pub role: Role,
}

impl AgentIdentity {
    pub fn driver(id: impl Into<String>) -> Self {
        Self {
            id: AgentId::new(id),
            role: Role::Driver,
        }
    }
}

/// A collection point to visit.
///
/// Invariants: `fill_level <= 100`, `priority >= 1`. Both are checked on
/// construction and deserialization, so a `Stop` in hand is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStop", rename_all = "camelCase")]
pub struct Stop {
    code: StopCode,
    location: GeoPoint,
    fill_level: u8,
    priority: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStop {
    code: StopCode,
    location: GeoPoint,
    #[serde(default)]
    fill_level: u8,
    #[serde(default = "default_priority")]
    priority: u32,
}

fn default_priority() -> u32 {
    1
}

impl TryFrom<RawStop> for Stop {
    type Error = StopError;

    fn try_from(raw: RawStop) -> Result<Self, Self::Error> {
        Stop::new(raw.code, raw.location, raw.fill_level, raw.priority)
    }
}

impl Stop {
    pub fn new(
        code: impl Into<StopCode>,
        location: impl Into<GeoPoint>,
        fill_level: u8,
        priority: u32,
    ) -> Result<Self, StopError> {
        let code = code.into();
        if code.0.is_empty() {
            return Err(StopError::EmptyCode);
        }
        if fill_level > 100 {
            return Err(StopError::FillLevel(fill_level));
        }
        if priority < 1 {
            return Err(StopError::Priority);
        }
        Ok(Self {
            code,
            location: location.into(),
            fill_level,
            priority,
        })
    }

    pub fn code(&self) -> &StopCode {
        &self.code
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// Percentage full, 0..=100.
    pub fn fill_level(&self) -> u8 {
        self.fill_level
    }

    /// Higher is more urgent; at least 1.
    pub fn priority(&self) -> u32 {
        self.priority
    }
}

impl From<&str> for StopCode {
    fn from(code: &str) -> Self {
        StopCode::new(code)
    }
}

impl From<String> for StopCode {
    fn from(code: String) -> Self {
        StopCode(code)
    }
}

/// One point on the depot-to-depot path handed back for map rendering.
/// The depot carries no code, fill level, or priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<StopCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

impl PathPoint {
    pub fn depot(location: GeoPoint) -> Self {
        Self {
            lat: location.lat,
            lng: location.lng,
            code: None,
            fill_level: None,
            priority: None,
        }
    }

    pub fn is_depot(&self) -> bool {
        self.code.is_none()
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

impl From<&Stop> for PathPoint {
    fn from(stop: &Stop) -> Self {
        Self {
            lat: stop.location.lat,
            lng: stop.location.lng,
            code: Some(stop.code.clone()),
            fill_level: Some(stop.fill_level),
            priority: Some(stop.priority),
        }
    }
}

/// Road distance and duration for a whole trip, already rounded.
/// Both are zero when the routing provider could not be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub total_distance_km: f64,
    pub total_duration_min: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub Uuid);

impl TripId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The persisted outcome of one route construction. Never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    pub agent_id: AgentId,
    pub visit_order: Vec<StopCode>,
    pub total_distance_km: f64,
    pub total_duration_min: u32,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// A fresh `pending` trip stamped with the current time.
    pub fn pending(agent_id: AgentId, visit_order: Vec<StopCode>, summary: TripSummary) -> Self {
        Self {
            id: TripId::random(),
            agent_id,
            visit_order,
            total_distance_km: summary.total_distance_km,
            total_duration_min: summary.total_duration_min,
            status: TripStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_rejects_overfull() {
        let err = Stop::new("BIN-1", (12.97, 77.59), 101, 1).unwrap_err();
        assert_eq!(err, StopError::FillLevel(101));
    }

    #[test]
    fn test_stop_rejects_zero_priority() {
        let err = Stop::new("BIN-1", (12.97, 77.59), 50, 0).unwrap_err();
        assert_eq!(err, StopError::Priority);
    }

    #[test]
    fn test_stop_rejects_empty_code() {
        assert_eq!(Stop::new("", (0.0, 0.0), 0, 1).unwrap_err(), StopError::EmptyCode);
    }

    #[test]
    fn test_stop_deserialize_applies_defaults() {
        let stop: Stop =
            serde_json::from_str(r#"{"code":"BIN-7","location":{"lat":12.9,"lng":77.6}}"#).unwrap();
        assert_eq!(stop.fill_level(), 0);
        assert_eq!(stop.priority(), 1);
        assert_eq!(stop.code().as_str(), "BIN-7");
    }

    #[test]
    fn test_stop_deserialize_validates() {
        let result: Result<Stop, _> = serde_json::from_str(
            r#"{"code":"BIN-7","location":{"lat":12.9,"lng":77.6},"fillLevel":150,"priority":2}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_depot_path_point_omits_stop_fields() {
        let json = serde_json::to_value(PathPoint::depot(GeoPoint::new(12.9716, 77.5946))).unwrap();
        assert_eq!(json, serde_json::json!({"lat": 12.9716, "lng": 77.5946}));
    }

    #[test]
    fn test_pending_trip() {
        let trip = Trip::pending(
            AgentId::new("driver-1"),
            vec![StopCode::new("A")],
            TripSummary { total_distance_km: 1.5, total_duration_min: 4 },
        );
        assert_eq!(trip.status, TripStatus::Pending);
        assert_eq!(trip.total_duration_min, 4);
        assert_eq!(serde_json::to_value(trip.status).unwrap(), "pending");
        assert_eq!(serde_json::to_value(TripStatus::InProgress).unwrap(), "in-progress");
    }
}
