//! Planning request.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::RequestError;
use crate::traits::CategoryId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlanRequest {
    pub start: Coordinate,
    /// Categories the walker cares about.
    pub interests: HashSet<CategoryId>,
    /// Total minutes available for walking and visiting.
    pub budget_minutes: f64,
    /// Maximum hop length in meters.
    pub search_radius_m: f64,
    /// Top-k pool size; selects the randomized variant.
    #[serde(default)]
    pub pool_size: Option<usize>,
    /// Seed for the randomized variant.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RoutePlanRequest {
    pub fn new(
        start: Coordinate,
        interests: impl IntoIterator<Item = CategoryId>,
        budget_minutes: f64,
        search_radius_m: f64,
    ) -> Self {
        Self {
            start,
            interests: interests.into_iter().collect(),
            budget_minutes,
            search_radius_m,
            pool_size: None,
            seed: None,
        }
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = Some(pool_size);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// True when the request asks for the randomized top-k variant.
    pub fn is_randomized(&self) -> bool {
        self.pool_size.is_some() || self.seed.is_some()
    }

    /// Rejects requests the planner must never see.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.interests.is_empty() {
            return Err(RequestError::EmptyInterests);
        }
        if self.budget_minutes.is_nan() || self.budget_minutes <= 0.0 {
            return Err(RequestError::NonPositiveBudget(self.budget_minutes));
        }
        if self.search_radius_m.is_nan() || self.search_radius_m <= 0.0 {
            return Err(RequestError::NonPositiveRadius(self.search_radius_m));
        }
        if !self.start.is_valid() {
            return Err(RequestError::InvalidStart {
                lat: self.start.lat,
                lon: self.start.lon,
            });
        }
        if self.pool_size == Some(0) {
            return Err(RequestError::EmptyPool);
        }
        Ok(())
    }
}
