//! Aggregate statistics over a user's skills and practice history.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use skillwise_core::skill::{Activity, FreshnessTier, Skill};
use skillwise_decay::classify;

/// Skills at or above this count as strong.
pub const STRONG_AT: f64 = 80.0;
/// Skills below this count as weak.
pub const WEAK_BELOW: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub skills: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSkill {
    pub skill_id: String,
    pub name: String,
    pub score: f64,
    pub tier: FreshnessTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub skill_count: usize,
    /// Mean current score, 0 when there are no skills.
    pub average_score: f64,
    pub strong_skills: usize,
    pub weak_skills: usize,
    /// Activities practiced within the reporting window.
    pub recent_activity_count: usize,
    pub total_practice_minutes: u64,
    /// Mean session length, 0 when nothing was logged.
    pub average_practice_minutes: f64,
    /// Most common categories, largest first.
    pub top_categories: Vec<CategoryCount>,
    /// Every skill, strongest first.
    pub ranking: Vec<RankedSkill>,
}

impl AnalyticsSummary {
    /// Total practice time as `"{hours}h {minutes}m"`.
    pub fn practice_time_label(&self) -> String {
        format!(
            "{}h {}m",
            self.total_practice_minutes / 60,
            self.total_practice_minutes % 60
        )
    }

    /// Total practice time in whole hours, rounding half an hour up.
    pub fn practice_hours_rounded(&self) -> u64 {
        (self.total_practice_minutes + 30) / 60
    }
}

/// Summarize already-decayed skills and their activities as of `now`.
pub fn summarize(
    skills: &[Skill],
    activities: &[Activity],
    now: DateTime<Utc>,
    window_days: i64,
    top_categories: usize,
) -> AnalyticsSummary {
    let scores: Vec<f64> = skills.iter().map(|s| s.current_score.value()).collect();
    let average_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    let window = Duration::days(window_days);
    let recent_activity_count = activities
        .iter()
        .filter(|a| now - a.practiced_at <= window)
        .count();

    let total_practice_minutes: u64 = activities.iter().map(|a| a.duration_minutes as u64).sum();
    let average_practice_minutes = if activities.is_empty() {
        0.0
    } else {
        total_practice_minutes as f64 / activities.len() as f64
    };

    let mut ranking: Vec<RankedSkill> = skills
        .iter()
        .map(|s| RankedSkill {
            skill_id: s.id.clone(),
            name: s.name.clone(),
            score: s.current_score.value(),
            tier: classify(s.current_score.value()),
        })
        .collect();
    ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

    AnalyticsSummary {
        skill_count: skills.len(),
        average_score,
        strong_skills: scores.iter().filter(|&&s| s >= STRONG_AT).count(),
        weak_skills: scores.iter().filter(|&&s| s < WEAK_BELOW).count(),
        recent_activity_count,
        total_practice_minutes,
        average_practice_minutes,
        top_categories: category_breakdown(skills, top_categories),
        ranking,
    }
}

/// Count skills per category. Ties keep first-seen order.
fn category_breakdown(skills: &[Skill], limit: usize) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for skill in skills {
        match counts.iter_mut().find(|c| c.category == skill.category) {
            Some(entry) => entry.skills += 1,
            None => counts.push(CategoryCount {
                category: skill.category.clone(),
                skills: 1,
            }),
        }
    }
    // Stable sort preserves first-seen order among equal counts.
    counts.sort_by(|a, b| b.skills.cmp(&a.skills));
    counts.truncate(limit);
    counts
}
