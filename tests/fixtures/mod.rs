//! Test fixtures for walk-planner.
//!
//! Provides realistic test data including:
//! - Nizhny Novgorod landmarks and popular start points
//! - A table-driven distance service for exact-number scenarios

pub mod nizhny_novgorod_locations;

pub use nizhny_novgorod_locations::*;

use walk_planner::{Coordinate, DistanceService};

/// Distances looked up from an explicit table.
///
/// Pairs are symmetric; identical coordinates are 0 m apart and unknown
/// pairs are unreachable.
#[derive(Debug, Default)]
pub struct TableDistance {
    legs: Vec<(Coordinate, Coordinate, f64)>,
}

impl TableDistance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leg(mut self, from: Coordinate, to: Coordinate, meters: f64) -> Self {
        self.legs.push((from, to, meters));
        self
    }
}

impl DistanceService for TableDistance {
    fn distance_m(&self, from: Coordinate, to: Coordinate) -> f64 {
        if from == to {
            return 0.0;
        }
        self.legs
            .iter()
            .find(|(a, b, _)| (*a == from && *b == to) || (*a == to && *b == from))
            .map(|(_, _, meters)| *meters)
            .unwrap_or(f64::INFINITY)
    }
}

/// Routes planner logs into the test harness output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
