use serde::{Deserialize, Serialize};

use skillwise_core::constants::{
    DIFFICULTY_STEP, MAX_DURATION_BOOST, MAX_SCORE, MINUTES_PER_BOOST_POINT, MIN_SCORE,
};

/// Exponential decay of a score over elapsed time.
///
/// ```text
/// decayed = baseScore × e^(−decayRate × daysElapsed)
/// ```
///
/// Result is clamped to [0, 100]. Negative rates or elapsed days are not
/// checked; callers construct valid inputs.
pub fn decayed_score(base_score: f64, decay_rate: f64, days_elapsed: f64) -> f64 {
    let decayed = base_score * (-decay_rate * days_elapsed).exp();
    decayed.clamp(MIN_SCORE, MAX_SCORE)
}

/// Points earned by one practice session.
///
/// ```text
/// baseBoost  = min(durationMinutes / 10, 10)
/// multiplier = 1 + (difficulty − 1) × 0.2
/// boost      = baseBoost × multiplier
/// ```
///
/// Range over valid inputs: 0 – 18.
pub fn activity_boost(duration_minutes: f64, difficulty: u8) -> f64 {
    let base_boost = (duration_minutes / MINUTES_PER_BOOST_POINT).min(MAX_DURATION_BOOST);
    let multiplier = 1.0 + (difficulty as f64 - 1.0) * DIFFICULTY_STEP;
    base_boost * multiplier
}

/// Add a boost to a score, capped at 100.
pub fn apply_boost(current_score: f64, boost: f64) -> f64 {
    (current_score + boost).min(MAX_SCORE)
}

/// How long until a decaying score falls to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "snake_case")]
pub enum DaysUntil {
    /// Reaches the target after this many whole days (0 = already there).
    Days(u32),
    /// Exponential decay approaches but never reaches the target.
    Never,
}

impl DaysUntil {
    /// The finite day count, if there is one.
    pub fn days(self) -> Option<u32> {
        match self {
            Self::Days(d) => Some(d),
            Self::Never => None,
        }
    }
}

/// Solve the decay equation for elapsed time.
///
/// ```text
/// days = ln(targetScore / currentScore) / −decayRate
/// ```
///
/// Rounded to the nearest day. A score already at or below the target
/// yields `Days(0)`; a target at or below zero is never reached.
pub fn predict_days_until(current_score: f64, target_score: f64, decay_rate: f64) -> DaysUntil {
    if current_score <= target_score {
        return DaysUntil::Days(0);
    }
    if target_score <= 0.0 {
        return DaysUntil::Never;
    }
    let days = (target_score / current_score).ln() / -decay_rate;
    // `as` saturates, so vanishing rates pin to u32::MAX instead of wrapping.
    DaysUntil::Days(days.max(0.0).round() as u32)
}
