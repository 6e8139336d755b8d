//! Revision suggestions: which skills need practice, and how soon.
//!
//! Critical: score < 50, weakest first, with the time to reach zero.
//! Warning: 50 ≤ score < 70, weakest first, with the time to drop to 50.
//! Healthy: score ≥ 70, a short preview plus a count of the rest.

use serde::{Deserialize, Serialize};

use skillwise_core::skill::{FreshnessTier, Skill};
use skillwise_decay::{classify, predict_days_until, DaysUntil};

/// Skills below this need immediate revision.
pub const CRITICAL_BELOW: f64 = 50.0;
/// Skills below this (and not critical) are trending toward critical.
pub const WARNING_BELOW: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionItem {
    pub skill: Skill,
    pub tier: FreshnessTier,
    /// Time until the bucket's target score: zero for critical skills,
    /// [`CRITICAL_BELOW`] for warning skills.
    pub eta: DaysUntil,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionPlan {
    pub critical: Vec<RevisionItem>,
    pub warning: Vec<RevisionItem>,
    pub healthy_preview: Vec<Skill>,
    /// Healthy skills not in the preview.
    pub more_healthy: usize,
}

impl RevisionPlan {
    /// True when there are no skills at all.
    pub fn is_empty(&self) -> bool {
        self.critical.is_empty()
            && self.warning.is_empty()
            && self.healthy_preview.is_empty()
            && self.more_healthy == 0
    }

    pub fn needs_attention(&self) -> usize {
        self.critical.len() + self.warning.len()
    }
}

/// Bucket already-decayed skills into a revision plan.
/// Healthy skills keep their input order.
pub fn plan(skills: &[Skill], healthy_preview: usize) -> RevisionPlan {
    let mut critical = bucket(skills, |s| s < CRITICAL_BELOW, 0.0);
    let mut warning = bucket(skills, |s| (CRITICAL_BELOW..WARNING_BELOW).contains(&s), CRITICAL_BELOW);
    critical.sort_by(|a, b| score_of(&a.skill).total_cmp(&score_of(&b.skill)));
    warning.sort_by(|a, b| score_of(&a.skill).total_cmp(&score_of(&b.skill)));

    let healthy: Vec<&Skill> = skills
        .iter()
        .filter(|s| score_of(s) >= WARNING_BELOW)
        .collect();
    let shown = healthy.len().min(healthy_preview);

    RevisionPlan {
        critical,
        warning,
        healthy_preview: healthy[..shown].iter().map(|s| (*s).clone()).collect(),
        more_healthy: healthy.len() - shown,
    }
}

fn bucket(skills: &[Skill], include: impl Fn(f64) -> bool, target: f64) -> Vec<RevisionItem> {
    skills
        .iter()
        .filter(|s| include(score_of(s)))
        .map(|s| RevisionItem {
            skill: s.clone(),
            tier: classify(score_of(s)),
            eta: predict_days_until(score_of(s), target, s.decay_rate),
        })
        .collect()
}

fn score_of(skill: &Skill) -> f64 {
    skill.current_score.value()
}
