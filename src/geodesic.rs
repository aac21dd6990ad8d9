//! Distance services over the WGS84 ellipsoid.
//!
//! [`GeodesicDistance`] is the default and follows the ellipsoid exactly.
//! [`HaversineDistance`] treats the earth as a sphere; it is cheaper and
//! slightly less accurate, which is fine for rough pre-filtering.

use geo::{Distance, Geodesic, Haversine};

use crate::coordinate::Coordinate;
use crate::traits::DistanceService;

/// Ellipsoidal geodesic distance (Karney's algorithm).
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodesicDistance;

impl DistanceService for GeodesicDistance {
    fn distance_m(&self, from: Coordinate, to: Coordinate) -> f64 {
        if from == to {
            return 0.0;
        }
        Geodesic.distance(geo::Point::from(from), geo::Point::from(to))
    }
}

/// Great-circle distance on a mean-radius sphere.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineDistance;

impl DistanceService for HaversineDistance {
    fn distance_m(&self, from: Coordinate, to: Coordinate) -> f64 {
        if from == to {
            return 0.0;
        }
        Haversine.distance(geo::Point::from(from), geo::Point::from(to))
    }
}
