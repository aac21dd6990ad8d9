//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::scoring::{
    CategoryMatch, DEFAULT_MAX_DISTANCE_M, DEFAULT_OFF_INTEREST_WEIGHT, DEFAULT_VISIT_MINUTES,
    ScoringPolicy,
};
use crate::travel_time::{DEFAULT_WALKING_SPEED_KMH, RoundingPolicy, TravelTimeEstimator};

/// Pool size used by the randomized variant when the request names none.
pub const DEFAULT_POOL_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Assumed walking speed in km/h.
    pub walking_speed_kmh: f64,
    pub rounding: RoundingPolicy,
    pub category_match: CategoryMatch,
    /// Weight of off-interest points under lenient matching.
    pub off_interest_weight: f64,
    /// Longest single hop in meters.
    pub max_distance_m: f64,
    /// Minutes spent at each stop.
    pub visit_minutes: f64,
    /// Top-k pool for the randomized variant.
    pub default_pool_size: usize,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            walking_speed_kmh: DEFAULT_WALKING_SPEED_KMH,
            rounding: RoundingPolicy::default(),
            category_match: CategoryMatch::default(),
            off_interest_weight: DEFAULT_OFF_INTEREST_WEIGHT,
            max_distance_m: DEFAULT_MAX_DISTANCE_M,
            visit_minutes: DEFAULT_VISIT_MINUTES,
            default_pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl PlannerOptions {
    /// Parses options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        positive("walking_speed_kmh", self.walking_speed_kmh)?;
        positive("max_distance_m", self.max_distance_m)?;
        positive("visit_minutes", self.visit_minutes)?;

        if !(0.0..=1.0).contains(&self.off_interest_weight) {
            return Err(OptionsError::Invalid {
                field: "off_interest_weight",
                reason: format!("must be within [0, 1], got {}", self.off_interest_weight),
            });
        }
        if self.default_pool_size == 0 {
            return Err(OptionsError::Invalid {
                field: "default_pool_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn travel_time_estimator(&self) -> TravelTimeEstimator {
        TravelTimeEstimator::new(self.walking_speed_kmh, self.rounding)
    }

    pub fn scoring_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            category_match: self.category_match,
            off_interest_weight: self.off_interest_weight,
            max_distance_m: self.max_distance_m,
            visit_minutes: self.visit_minutes,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), OptionsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OptionsError::Invalid {
            field,
            reason: format!("must be positive, got {}", value),
        })
    }
}
