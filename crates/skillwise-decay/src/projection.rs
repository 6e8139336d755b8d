//! Decay projection curves: the expected score on each of the next N days
//! if the skill is not practiced.

use serde::{Deserialize, Serialize};

use crate::formula::decayed_score;

/// One point on a projection curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub day: u32,
    pub score: f64,
}

/// Lazy iterator over `(day, score)` for `day = 0 ..= horizon_days`.
///
/// Cloning restarts from the clone's position; constructing a new curve
/// with the same inputs yields the same points.
#[derive(Debug, Clone)]
pub struct DecayCurve {
    initial_score: f64,
    decay_rate: f64,
    next_day: u32,
    horizon_days: u32,
    done: bool,
}

impl DecayCurve {
    pub fn new(initial_score: f64, decay_rate: f64, horizon_days: u32) -> Self {
        Self {
            initial_score,
            decay_rate,
            next_day: 0,
            horizon_days,
            done: false,
        }
    }
}

impl Iterator for DecayCurve {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.done {
            return None;
        }
        let day = self.next_day;
        // Tracked separately so a horizon of u32::MAX terminates.
        if day == self.horizon_days {
            self.done = true;
        } else {
            self.next_day += 1;
        }
        Some(CurvePoint {
            day,
            score: decayed_score(self.initial_score, self.decay_rate, day as f64),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.horizon_days - self.next_day) as usize + 1;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DecayCurve {}

impl std::iter::FusedIterator for DecayCurve {}

/// Eagerly collect a projection curve of `horizon_days + 1` points.
pub fn generate_curve(initial_score: f64, decay_rate: f64, horizon_days: u32) -> Vec<CurvePoint> {
    DecayCurve::new(initial_score, decay_rate, horizon_days).collect()
}
