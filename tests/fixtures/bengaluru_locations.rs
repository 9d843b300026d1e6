//! Bengaluru locations for realistic test fixtures.
//!
//! Approximate coordinates of well-known public places, all within a short
//! drive of the default depot near Vidhana Soudha.

#![allow(dead_code)]

use bin_route_planner::{GeoPoint, Stop};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// A stop at this location, coded after the location name.
    pub fn stop(&self, fill_level: u8, priority: u32) -> Stop {
        Stop::new(self.name, self.point(), fill_level, priority).expect("valid fixture stop")
    }
}

pub const DEPOT: Location = Location::new("Depot", 12.9716, 77.5946);

pub const CUBBON_PARK: Location = Location::new("Cubbon Park", 12.9763, 77.5929);
pub const MG_ROAD: Location = Location::new("MG Road", 12.9756, 77.6050);
pub const LALBAGH: Location = Location::new("Lalbagh", 12.9507, 77.5848);
pub const INDIRANAGAR: Location = Location::new("Indiranagar", 12.9719, 77.6412);
pub const KORAMANGALA: Location = Location::new("Koramangala", 12.9352, 77.6245);
pub const MALLESHWARAM: Location = Location::new("Malleshwaram", 13.0035, 77.5709);
pub const JAYANAGAR: Location = Location::new("Jayanagar", 12.9250, 77.5938);
pub const HEBBAL: Location = Location::new("Hebbal", 13.0358, 77.5970);
pub const YESHWANTHPUR: Location = Location::new("Yeshwanthpur", 13.0285, 77.5400);
pub const WHITEFIELD: Location = Location::new("Whitefield", 12.9698, 77.7500);

pub const NEIGHBOURHOODS: &[Location] = &[
    CUBBON_PARK,
    MG_ROAD,
    LALBAGH,
    INDIRANAGAR,
    KORAMANGALA,
    MALLESHWARAM,
    JAYANAGAR,
    HEBBAL,
    YESHWANTHPUR,
    WHITEFIELD,
];
