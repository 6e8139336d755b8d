use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skillwise_core::config::DecayConfig;
use skillwise_core::skill::{Activity, FreshnessTier, Score, Skill};
use skillwise_core::traits::IScoringEngine;

use crate::elapsed::days_between;
use crate::formula::{self, DaysUntil};
use crate::freshness;
use crate::projection::DecayCurve;

/// Effect of one logged activity on its skill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityOutcome {
    /// Score stored at the last checkpoint.
    pub previous_score: Score,
    /// Score after decay up to the moment of practice.
    pub decayed_score: Score,
    pub boost: f64,
    /// `min(100, decayed_score + boost)`; the new checkpoint.
    pub new_score: Score,
}

/// Display-time view of a skill: decayed score plus derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillStatus {
    /// The skill with `current_score` replaced by the decayed score.
    pub skill: Skill,
    pub tier: FreshnessTier,
    pub days_since_practice: u64,
}

/// Skill-level facade over the decay formulas.
#[derive(Debug, Clone, Default)]
pub struct DecayEngine {
    config: DecayConfig,
}

impl DecayEngine {
    /// Create a DecayEngine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Decayed score of `skill` at `now`. Elapsed time is counted in whole
    /// days rounded up, so practice earlier today already costs one day.
    pub fn current_score(&self, skill: &Skill, now: DateTime<Utc>) -> Score {
        let days = days_between(skill.last_practiced_at, now);
        Score::new(formula::decayed_score(
            skill.current_score.value(),
            skill.decay_rate,
            days as f64,
        ))
    }

    /// Decayed view of a skill for display.
    pub fn evaluate(&self, skill: &Skill, now: DateTime<Utc>) -> SkillStatus {
        let score = self.current_score(skill, now);
        SkillStatus {
            skill: skill.with_score(score),
            tier: freshness::classify(score.value()),
            days_since_practice: days_between(skill.last_practiced_at, now),
        }
    }

    pub fn evaluate_batch(&self, skills: &[Skill], now: DateTime<Utc>) -> Vec<SkillStatus> {
        skills.iter().map(|s| self.evaluate(s, now)).collect()
    }

    /// Work out the new checkpoint score after `activity` is practiced at `now`.
    pub fn apply_activity(
        &self,
        skill: &Skill,
        activity: &Activity,
        now: DateTime<Utc>,
    ) -> ActivityOutcome {
        let decayed = self.current_score(skill, now);
        let boost = self.activity_boost(activity);
        ActivityOutcome {
            previous_score: skill.current_score,
            decayed_score: decayed,
            boost,
            new_score: Score::new(formula::apply_boost(decayed.value(), boost)),
        }
    }

    /// Projection from the skill's score at `now`. `None` uses the configured horizon.
    pub fn projection(
        &self,
        skill: &Skill,
        now: DateTime<Utc>,
        horizon_days: Option<u32>,
    ) -> DecayCurve {
        let horizon = horizon_days.unwrap_or(self.config.projection_horizon_days);
        DecayCurve::new(self.current_score(skill, now).value(), skill.decay_rate, horizon)
    }

    /// Days until the skill's score at `now` decays to `target`.
    pub fn forecast(&self, skill: &Skill, now: DateTime<Utc>, target: f64) -> DaysUntil {
        formula::predict_days_until(self.current_score(skill, now).value(), target, skill.decay_rate)
    }
}

impl IScoringEngine for DecayEngine {
    fn score_at(&self, skill: &Skill, now: DateTime<Utc>) -> Score {
        self.current_score(skill, now)
    }

    fn activity_boost(&self, activity: &Activity) -> f64 {
        formula::activity_boost(activity.duration_minutes as f64, activity.difficulty)
    }
}
