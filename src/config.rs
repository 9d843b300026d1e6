//! Planner configuration.
//!
//! Defaults reproduce the production deployment; `from_env` layers
//! environment overrides on top.

use std::env;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::geo::GeoPoint;
use crate::osrm::OsrmConfig;
use crate::sequencer::ScoringOptions;

/// Default depot: the municipal yard every tour starts and ends at.
pub const DEFAULT_DEPOT: GeoPoint = GeoPoint::new(12.9716, 77.5946);

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub depot: GeoPoint,
    pub osrm: OsrmConfig,
    pub scoring: ScoringOptions,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            depot: DEFAULT_DEPOT,
            osrm: OsrmConfig::default(),
            scoring: ScoringOptions::default(),
        }
    }
}

impl PlannerConfig {
    /// Defaults overridden by `ROUTE_DEPOT_LAT`, `ROUTE_DEPOT_LNG`,
    /// `OSRM_BASE_URL`, `OSRM_PROFILE` and `OSRM_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(lat) = parse_var(&lookup, "ROUTE_DEPOT_LAT")? {
            config.depot.lat = lat;
        }
        if let Some(lng) = parse_var(&lookup, "ROUTE_DEPOT_LNG")? {
            config.depot.lng = lng;
        }
        if let Some(base_url) = lookup("OSRM_BASE_URL") {
            config.osrm.base_url = base_url;
        }
        if let Some(profile) = lookup("OSRM_PROFILE") {
            config.osrm.profile = profile;
        }
        if let Some(timeout) = parse_var(&lookup, "OSRM_TIMEOUT_SECS")? {
            config.osrm.timeout_secs = timeout;
        }

        if !(-90.0..=90.0).contains(&config.depot.lat) {
            return Err(ConfigError::Invalid {
                key: "ROUTE_DEPOT_LAT",
                value: config.depot.lat.to_string(),
            });
        }
        if !(-180.0..=180.0).contains(&config.depot.lng) {
            return Err(ConfigError::Invalid {
                key: "ROUTE_DEPOT_LNG",
                value: config.depot.lng.to_string(),
            });
        }

        Ok(config)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
