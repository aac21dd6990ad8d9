//! Candidate relevance scoring.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::traits::{CategoryId, DistanceService, PointOfInterest};

/// Hard cap on a single hop, regardless of the requested radius.
pub const DEFAULT_MAX_DISTANCE_M: f64 = 2000.0;

/// Time spent at every stop.
pub const DEFAULT_VISIT_MINUTES: f64 = 20.0;

/// Multiplier for off-interest points under [`CategoryMatch::Lenient`].
pub const DEFAULT_OFF_INTEREST_WEIGHT: f64 = 0.1;

/// Keeps the score finite when the candidate is at the current position.
const DISTANCE_SMOOTHING_KM: f64 = 0.1;

/// How points outside the interest set are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMatch {
    /// Off-interest points stay eligible with a reduced weight.
    #[default]
    Lenient,
    /// Off-interest points are never selected.
    Strict,
}

/// Result of scoring one candidate from one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    /// Zero means the candidate is excluded this round.
    pub score: f64,
    /// Meters from the current position, `f64::INFINITY` when unreachable.
    pub distance_m: f64,
    pub visit_minutes: f64,
}

impl CandidateScore {
    fn excluded(distance_m: f64, visit_minutes: f64) -> Self {
        Self {
            score: 0.0,
            distance_m,
            visit_minutes,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.score > 0.0
    }
}

/// Scores candidates by category match and proximity.
#[derive(Debug, Clone)]
pub struct ScoringPolicy {
    pub category_match: CategoryMatch,
    /// Multiplier for off-interest points when matching is lenient.
    pub off_interest_weight: f64,
    pub max_distance_m: f64,
    pub visit_minutes: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            category_match: CategoryMatch::default(),
            off_interest_weight: DEFAULT_OFF_INTEREST_WEIGHT,
            max_distance_m: DEFAULT_MAX_DISTANCE_M,
            visit_minutes: DEFAULT_VISIT_MINUTES,
        }
    }
}

impl ScoringPolicy {
    pub fn strict() -> Self {
        Self {
            category_match: CategoryMatch::Strict,
            ..Self::default()
        }
    }

    fn category_multiplier(&self, category: CategoryId, interests: &HashSet<CategoryId>) -> f64 {
        if interests.contains(&category) {
            return 1.0;
        }
        match self.category_match {
            CategoryMatch::Lenient => self.off_interest_weight,
            CategoryMatch::Strict => 0.0,
        }
    }

    /// Scores `candidate` as the next stop after `position`.
    ///
    /// `score = multiplier / (distance_km + 0.1)`, or zero when the
    /// candidate is farther than the search radius or the hop cap.
    pub fn score<P, D>(
        &self,
        candidate: &P,
        interests: &HashSet<CategoryId>,
        position: Coordinate,
        search_radius_m: f64,
        distance: &D,
    ) -> CandidateScore
    where
        P: PointOfInterest,
        D: DistanceService + ?Sized,
    {
        let location = candidate.location();
        if !location.is_valid() {
            return CandidateScore::excluded(f64::INFINITY, self.visit_minutes);
        }

        let distance_m = distance.distance_m(position, location);
        if distance_m > self.max_distance_m || distance_m > search_radius_m {
            return CandidateScore::excluded(distance_m, self.visit_minutes);
        }

        let multiplier = self.category_multiplier(candidate.category(), interests);
        let score = multiplier / (distance_m / 1000.0 + DISTANCE_SMOOTHING_KM);

        CandidateScore {
            score,
            distance_m,
            visit_minutes: self.visit_minutes,
        }
    }
}
