//! Walking-time estimation.

use serde::{Deserialize, Serialize};

/// Default pedestrian speed.
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

/// Floor applied by [`RoundingPolicy::Floor`].
const FLOOR_MIN_MINUTES: f64 = 5.0;

/// Floor applied by [`RoundingPolicy::Ceiling`].
const CEILING_MIN_MINUTES: f64 = 1.0;

/// Float noise below this is dropped before rounding up.
const CEILING_TOLERANCE_MINUTES: f64 = 1e-9;

/// How raw walking minutes are turned into a planned duration.
///
/// Both policies return a strictly positive value for every distance, so
/// each committed stop consumes budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Keep fractional minutes but never less than 5.
    Floor,
    /// Round up to a whole minute, never less than 1.
    #[default]
    Ceiling,
}

/// Converts a walking distance into minutes.
#[derive(Debug, Clone)]
pub struct TravelTimeEstimator {
    /// Assumed walking speed in km/h.
    pub speed_kmh: f64,
    pub rounding: RoundingPolicy,
}

impl Default for TravelTimeEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_WALKING_SPEED_KMH,
            rounding: RoundingPolicy::default(),
        }
    }
}

impl TravelTimeEstimator {
    pub fn new(speed_kmh: f64, rounding: RoundingPolicy) -> Self {
        Self { speed_kmh, rounding }
    }

    /// Walking speed in meters per minute.
    fn meters_per_minute(&self) -> f64 {
        self.speed_kmh * 1000.0 / 60.0
    }

    /// Planned walking minutes for `distance_m` meters.
    ///
    /// Negative or NaN distances are treated as zero. An infinite distance
    /// yields infinite minutes, which no budget can absorb.
    pub fn minutes_for(&self, distance_m: f64) -> f64 {
        let distance_m = if distance_m > 0.0 { distance_m } else { 0.0 };
        let raw = distance_m / self.meters_per_minute();

        match self.rounding {
            RoundingPolicy::Floor => raw.max(FLOOR_MIN_MINUTES),
            RoundingPolicy::Ceiling => {
                if raw.is_infinite() {
                    return raw;
                }
                (raw - CEILING_TOLERANCE_MINUTES)
                    .ceil()
                    .max(CEILING_MIN_MINUTES)
            }
        }
    }
}
