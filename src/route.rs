//! Planned route and its summary.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::polyline::Polyline;
use crate::traits::{CategoryId, PointOfInterest};

/// One committed stop.
#[derive(Debug, Clone, Serialize)]
pub struct VisitEntry<'a, P> {
    point: &'a P,
    travel_minutes: f64,
    visit_minutes: f64,
    distance_m: f64,
}

impl<'a, P> VisitEntry<'a, P> {
    pub(crate) fn new(
        point: &'a P,
        travel_minutes: f64,
        visit_minutes: f64,
        distance_m: f64,
    ) -> Self {
        Self {
            point,
            travel_minutes,
            visit_minutes,
            distance_m,
        }
    }

    pub fn point(&self) -> &'a P {
        self.point
    }

    /// Walking minutes from the previous position.
    pub fn travel_minutes(&self) -> f64 {
        self.travel_minutes
    }

    pub fn visit_minutes(&self) -> f64 {
        self.visit_minutes
    }

    /// Meters from the previous position.
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    pub fn total_minutes(&self) -> f64 {
        self.travel_minutes + self.visit_minutes
    }
}

/// Marker data handed to a map renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapStop<'a> {
    /// 1-based visiting order.
    pub order: usize,
    pub coordinate: Coordinate,
    pub title: &'a str,
    pub category: CategoryId,
}

/// Stops in visiting order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Route<'a, P> {
    entries: Vec<VisitEntry<'a, P>>,
}

impl<'a, P> Route<'a, P> {
    pub(crate) fn new(entries: Vec<VisitEntry<'a, P>>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[VisitEntry<'a, P>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisitEntry<'a, P>> {
        self.entries.iter()
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary::of(self)
    }
}

impl<'a, P: PointOfInterest> Route<'a, P> {
    /// Ids in visiting order.
    pub fn ids(&self) -> Vec<&'a P::Id> {
        self.entries.iter().map(|entry| entry.point().id()).collect()
    }

    pub fn map_stops(&self) -> Vec<MapStop<'a>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let point = entry.point();
                MapStop {
                    order: index + 1,
                    coordinate: point.location(),
                    title: point.title(),
                    category: point.category(),
                }
            })
            .collect()
    }

    /// The start followed by every stop, in visiting order.
    pub fn polyline(&self, start: Coordinate) -> Polyline {
        let mut points = Vec::with_capacity(self.entries.len() + 1);
        points.push(start);
        points.extend(self.entries.iter().map(|entry| entry.point.location()));
        Polyline::new(points)
    }
}

/// Totals over a finished route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub stops: usize,
    pub total_distance_m: f64,
    pub travel_minutes: f64,
    pub visit_minutes: f64,
    /// Walking plus visiting.
    pub total_minutes: f64,
}

impl RouteSummary {
    pub fn of<P>(route: &Route<'_, P>) -> Self {
        route.iter().fold(Self::default(), |mut summary, entry| {
            summary.stops += 1;
            summary.total_distance_m += entry.distance_m;
            summary.travel_minutes += entry.travel_minutes;
            summary.visit_minutes += entry.visit_minutes;
            summary.total_minutes += entry.total_minutes();
            summary
        })
    }
}
