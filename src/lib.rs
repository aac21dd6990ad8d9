//! walk-planner
//!
//! Greedy walking-tour planning over a catalog of points of interest:
//! pick stops that match the walker's interests and fit in a time budget.

pub mod coordinate;
pub mod error;
pub mod geodesic;
pub mod landmark;
pub mod options;
pub mod polyline;
pub mod request;
pub mod route;
pub mod scoring;
pub mod solver;
pub mod traits;
pub mod travel_time;

pub use coordinate::Coordinate;
pub use error::{OptionsError, PlanError, RequestError};
pub use geodesic::{GeodesicDistance, HaversineDistance};
pub use landmark::Landmark;
pub use options::PlannerOptions;
pub use request::RoutePlanRequest;
pub use route::{MapStop, Route, RouteSummary, VisitEntry};
pub use solver::{PlannedRoute, RouteBuilder, plan_batch, plan_route};
pub use traits::{CategoryId, DistanceService, PointOfInterest};
