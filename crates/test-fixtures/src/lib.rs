//! Shared builders for skills and activities used across the workspace's tests.
//!
//! Timestamps are anchored to [`fixed_now`] so expectations don't depend on
//! the wall clock.

use chrono::{DateTime, Duration, TimeZone, Utc};

use skillwise_core::skill::{Activity, ActivityKind, Score, Skill};

pub const TEST_USER: &str = "user-test";
pub const OTHER_USER: &str = "user-other";

/// A fixed reference instant for deterministic tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// A skill owned by [`TEST_USER`] whose score checkpoint is `days_ago` before `now`.
pub fn make_skill(name: &str, score: f64, decay_rate: f64, days_ago: i64) -> Skill {
    make_skill_at(TEST_USER, name, "Programming Language", score, decay_rate, days_ago, fixed_now())
}

/// Fully parameterised skill builder.
pub fn make_skill_at(
    user_id: &str,
    name: &str,
    category: &str,
    score: f64,
    decay_rate: f64,
    days_ago: i64,
    now: DateTime<Utc>,
) -> Skill {
    let practiced = now - Duration::days(days_ago);
    let mut skill = Skill::new(
        user_id,
        name,
        category,
        score.round().clamp(0.0, 100.0) as u8,
        decay_rate,
        practiced,
    );
    skill.current_score = Score::new(score);
    skill.created_at = practiced;
    skill.updated_at = practiced;
    skill
}

/// A skill in the given category with no decay history, for aggregation tests.
pub fn make_categorized(name: &str, category: &str, score: f64) -> Skill {
    make_skill_at(TEST_USER, name, category, score, 0.05, 0, fixed_now())
}

/// An activity for `skill` practiced `days_ago` before [`fixed_now`].
pub fn make_activity(skill: &Skill, duration_minutes: u32, difficulty: u8, days_ago: i64) -> Activity {
    let at = fixed_now() - Duration::days(days_ago);
    Activity::new(
        skill.user_id.clone(),
        skill.id.clone(),
        ActivityKind::Practice,
        duration_minutes,
        difficulty,
        None,
        at,
    )
}
