use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::score::Score;

/// A skill the user is tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Skill {
    /// UUID v4 identifier.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Display name, e.g. "Rust".
    pub name: String,
    /// Free-form category label (see `constants::SKILL_CATEGORIES`).
    pub category: String,
    /// Self-assessed proficiency at registration, 0–100.
    pub initial_proficiency: u8,
    /// Score at the last checkpoint (`last_practiced_at`).
    pub current_score: Score,
    /// Exponential decay constant per day. Always positive.
    pub decay_rate: f64,
    pub last_practiced_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Skill {
    /// Register a new skill at `now`. The starting score equals the
    /// initial proficiency and the practice clock starts immediately.
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        initial_proficiency: u8,
        decay_rate: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            name: name.into(),
            category: category.into(),
            initial_proficiency,
            current_score: Score::new(initial_proficiency as f64),
            decay_rate,
            last_practiced_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy of this skill with a different score, e.g. for display after decay.
    pub fn with_score(&self, score: Score) -> Self {
        Self {
            current_score: score,
            ..self.clone()
        }
    }
}
