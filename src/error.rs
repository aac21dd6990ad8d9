//! Error types for request validation and configuration.

use thiserror::Error;

/// A planning request the caller must fix before the planner runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("at least one interest category is required")]
    EmptyInterests,
    #[error("time budget must be positive, got {0} minutes")]
    NonPositiveBudget(f64),
    #[error("search radius must be positive, got {0} meters")]
    NonPositiveRadius(f64),
    #[error("start coordinate ({lat}, {lon}) is not a valid WGS84 position")]
    InvalidStart { lat: f64, lon: f64 },
    #[error("randomized pool size must be at least 1")]
    EmptyPool,
}

/// Planner configuration that could not be loaded or is out of range.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to parse planner options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid planner option `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Either half of a planning call failed validation.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Request(#[from] RequestError),
}
