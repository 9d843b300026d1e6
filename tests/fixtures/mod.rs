//! Test fixtures for bin-route-planner.
//!
//! Provides realistic test data:
//! - Real Bengaluru locations around the default depot
//! - Fake collaborators (routing providers, failing stores)

pub mod bengaluru_locations;
pub mod fakes;

pub use bengaluru_locations::*;
#[allow(unused_imports)]
pub use fakes::*;
