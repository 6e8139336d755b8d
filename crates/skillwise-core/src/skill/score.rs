use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use ts_rs::TS;

use crate::constants::{MAX_SCORE, MIN_SCORE};

/// Proficiency score clamped to [0.0, 100.0]. Deserialized values are
/// clamped too.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(from = "f64")]
#[ts(export)]
pub struct Score(f64);

impl Score {
    pub const MAX: Score = Score(MAX_SCORE);
    pub const ZERO: Score = Score(MIN_SCORE);

    /// Create a new Score, clamping to [0.0, 100.0]. NaN collapses to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(MIN_SCORE, MAX_SCORE))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

/// Adding a boost saturates at 100.
impl Add<f64> for Score {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Self::new(self.0 + rhs)
    }
}
