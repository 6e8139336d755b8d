use chrono::{DateTime, Utc};

use crate::skill::{Activity, Score, Skill};

/// Computes a skill's proficiency from its history.
pub trait IScoringEngine: Send + Sync {
    /// Score of `skill` at `now`, after decay since its last practice.
    fn score_at(&self, skill: &Skill, now: DateTime<Utc>) -> Score;

    /// Points an activity adds to its skill's score.
    fn activity_boost(&self, activity: &Activity) -> f64;
}
