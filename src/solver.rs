//! Greedy walking-route construction.
//!
//! Each step scores every unvisited catalog point from the current
//! position, keeps the ones that fit in the remaining budget, commits one
//! and moves there. The loop ends when nothing fits or the budget can no
//! longer cover a single visit.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::coordinate::Coordinate;
use crate::error::{OptionsError, PlanError, RequestError};
use crate::options::PlannerOptions;
use crate::request::RoutePlanRequest;
use crate::route::{Route, RouteSummary, VisitEntry};
use crate::scoring::ScoringPolicy;
use crate::travel_time::TravelTimeEstimator;
use crate::traits::{DistanceService, PointOfInterest};

/// A route together with its totals.
#[derive(Debug, Clone)]
pub struct PlannedRoute<'a, P> {
    pub route: Route<'a, P>,
    pub summary: RouteSummary,
}

/// A feasible next stop.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    /// Position in the catalog.
    index: usize,
    score: f64,
    distance_m: f64,
    travel_minutes: f64,
    visit_minutes: f64,
}

impl Candidate {
    fn cost_minutes(&self) -> f64 {
        self.travel_minutes + self.visit_minutes
    }
}

/// Builds routes over a shared, read-only catalog.
///
/// The builder holds no per-request state, so one instance can serve any
/// number of requests, including concurrently.
#[derive(Debug, Clone)]
pub struct RouteBuilder<'c, P, D> {
    catalog: &'c [P],
    distance: D,
    scoring: ScoringPolicy,
    travel_time: TravelTimeEstimator,
    default_pool_size: usize,
}

impl<'c, P, D> RouteBuilder<'c, P, D>
where
    P: PointOfInterest,
    D: DistanceService,
{
    /// Fails when `options` would let a step cost zero or negative time.
    pub fn new(
        catalog: &'c [P],
        distance: D,
        options: &PlannerOptions,
    ) -> Result<Self, OptionsError> {
        if let Err(err) = options.validate() {
            warn!(error = %err, "rejected planner options");
            return Err(err);
        }

        Ok(Self {
            catalog,
            distance,
            scoring: options.scoring_policy(),
            travel_time: options.travel_time_estimator(),
            default_pool_size: options.default_pool_size,
        })
    }

    /// Validates `request` before building, then attaches the summary.
    pub fn plan(&self, request: &RoutePlanRequest) -> Result<PlannedRoute<'c, P>, RequestError> {
        if let Err(err) = request.validate() {
            warn!(error = %err, "rejected route request");
            return Err(err);
        }

        let route = self.build(request);
        let summary = route.summary();
        Ok(PlannedRoute { route, summary })
    }

    /// Plans `request` with the variant it asks for.
    ///
    /// Requests carrying a pool size or a seed get the randomized variant
    /// with a generator owned by this call. Without a seed one is drawn
    /// from the OS and logged so the run can be replayed.
    pub fn build(&self, request: &RoutePlanRequest) -> Route<'c, P> {
        if !request.is_randomized() {
            return self.build_greedy(request);
        }

        let pool_size = request.pool_size.unwrap_or(self.default_pool_size);
        let seed = match request.seed {
            Some(seed) => seed,
            None => StdRng::from_os_rng().next_u64(),
        };
        debug!(seed, pool_size, "planning randomized route");

        let mut rng = StdRng::seed_from_u64(seed);
        self.build_with_rng(request, pool_size, &mut rng)
    }

    /// Deterministic variant: always takes the best-scoring candidate.
    ///
    /// Ties go to the point that comes first in the catalog.
    pub fn build_greedy(&self, request: &RoutePlanRequest) -> Route<'c, P> {
        self.construct(request, |candidates| {
            let mut best = candidates[0];
            for candidate in &candidates[1..] {
                if candidate.score > best.score {
                    best = *candidate;
                }
            }
            best
        })
    }

    /// Randomized variant: draws uniformly from the `pool_size` best
    /// candidates using the supplied generator.
    pub fn build_with_rng<R: Rng>(
        &self,
        request: &RoutePlanRequest,
        pool_size: usize,
        rng: &mut R,
    ) -> Route<'c, P> {
        let pool_size = pool_size.max(1);
        self.construct(request, |candidates| {
            // stable, so equal scores keep catalog order
            candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
            candidates.truncate(pool_size);
            candidates[rng.random_range(0..candidates.len())]
        })
    }

    /// Runs the construction loop; `select` is only called with a
    /// non-empty candidate list.
    fn construct<F>(&self, request: &RoutePlanRequest, mut select: F) -> Route<'c, P>
    where
        F: FnMut(&mut Vec<Candidate>) -> Candidate,
    {
        let catalog: &'c [P] = self.catalog;
        let mut position = request.start;
        let mut remaining = request.budget_minutes;
        let mut visited: HashSet<&'c P::Id> = HashSet::new();
        let mut entries = Vec::new();

        while remaining > self.scoring.visit_minutes {
            let mut candidates = self.feasible_candidates(request, position, remaining, &visited);
            if candidates.is_empty() {
                debug!(remaining, stops = entries.len(), "no feasible candidate left");
                break;
            }

            let chosen = select(&mut candidates);
            let point = &catalog[chosen.index];
            debug!(
                id = ?point.id(),
                score = chosen.score,
                distance_m = chosen.distance_m,
                travel_minutes = chosen.travel_minutes,
                remaining,
                "committed stop"
            );

            entries.push(VisitEntry::new(
                point,
                chosen.travel_minutes,
                chosen.visit_minutes,
                chosen.distance_m,
            ));
            visited.insert(point.id());
            position = point.location();
            remaining -= chosen.cost_minutes();
        }

        let route = Route::new(entries);
        let summary = route.summary();
        info!(
            stops = summary.stops,
            total_distance_m = summary.total_distance_m,
            total_minutes = summary.total_minutes,
            budget_minutes = request.budget_minutes,
            "route planned"
        );
        route
    }

    /// Unvisited points with a positive score whose walk plus visit fits in
    /// `remaining`, in catalog order.
    fn feasible_candidates(
        &self,
        request: &RoutePlanRequest,
        position: Coordinate,
        remaining: f64,
        visited: &HashSet<&'c P::Id>,
    ) -> Vec<Candidate> {
        self.catalog
            .iter()
            .enumerate()
            .filter(|(_, point)| !visited.contains(point.id()))
            .filter_map(|(index, point)| {
                let scored = self.scoring.score(
                    point,
                    &request.interests,
                    position,
                    request.search_radius_m,
                    &self.distance,
                );
                if !scored.is_eligible() {
                    return None;
                }

                let candidate = Candidate {
                    index,
                    score: scored.score,
                    distance_m: scored.distance_m,
                    travel_minutes: self.travel_time.minutes_for(scored.distance_m),
                    visit_minutes: scored.visit_minutes,
                };
                (candidate.cost_minutes() <= remaining).then_some(candidate)
            })
            .collect()
    }
}

/// Validates `options` and `request`, then plans over `catalog`.
pub fn plan_route<'c, P, D>(
    catalog: &'c [P],
    distance: D,
    options: &PlannerOptions,
    request: &RoutePlanRequest,
) -> Result<PlannedRoute<'c, P>, PlanError>
where
    P: PointOfInterest,
    D: DistanceService,
{
    let builder = RouteBuilder::new(catalog, distance, options)?;
    Ok(builder.plan(request)?)
}

/// Plans independent requests in parallel over one shared catalog.
///
/// Invalid options reject the whole batch. Otherwise each request gets its
/// own result, in request order.
pub fn plan_batch<'c, P, D>(
    catalog: &'c [P],
    distance: D,
    options: &PlannerOptions,
    requests: &[RoutePlanRequest],
) -> Result<Vec<Result<PlannedRoute<'c, P>, RequestError>>, OptionsError>
where
    P: PointOfInterest + Sync,
    D: DistanceService + Sync,
{
    let builder = RouteBuilder::new(catalog, distance, options)?;
    Ok(requests
        .par_iter()
        .map(|request| builder.plan(request))
        .collect())
}
