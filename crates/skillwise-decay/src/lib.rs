//! # skillwise-decay
//!
//! Pure scoring core: exponential decay of a skill's score, boosts from
//! logged practice, freshness tiers, and forecasts of future decay.
//! Nothing here performs I/O or holds state; callers persist results.

pub mod elapsed;
pub mod engine;
pub mod formula;
pub mod freshness;
pub mod projection;

pub use elapsed::{days_between, days_since};
pub use engine::{ActivityOutcome, DecayEngine, SkillStatus};
pub use formula::{activity_boost, apply_boost, decayed_score, predict_days_until, DaysUntil};
pub use freshness::classify;
pub use projection::{generate_curve, CurvePoint, DecayCurve};
