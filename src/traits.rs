//! Core domain traits for the walking-tour planner.
//!
//! These are intentionally minimal. Catalog owners implement
//! [`PointOfInterest`] for their own record types; the planner only reads
//! through it.

use std::fmt::Debug;
use std::hash::Hash;

use crate::coordinate::Coordinate;

/// Unique identifier for catalog entries.
pub trait Id: Clone + Eq + Hash + Debug {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug {}

/// Category identifier. Values need not belong to any known set.
pub type CategoryId = u32;

/// A point of interest that may be visited on a walk.
pub trait PointOfInterest {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Display title, passed through untouched.
    fn title(&self) -> &str;

    /// Free-text description, passed through untouched.
    fn description(&self) -> &str;

    fn category(&self) -> CategoryId;

    /// Location of the point (lat, lon).
    fn location(&self) -> Coordinate;
}

/// Distance between two coordinates in meters.
///
/// Implementations must be symmetric and return zero for identical inputs.
pub trait DistanceService {
    fn distance_m(&self, from: Coordinate, to: Coordinate) -> f64;
}

impl<D: DistanceService + ?Sized> DistanceService for &D {
    fn distance_m(&self, from: Coordinate, to: Coordinate) -> f64 {
        (**self).distance_m(from, to)
    }
}
