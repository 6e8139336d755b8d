use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::score::Score;

/// Point-in-time record of a skill's score, used for history charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkillSnapshot {
    pub id: String,
    pub skill_id: String,
    pub score: Score,
    pub snapshot_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl SkillSnapshot {
    pub fn new(skill_id: impl Into<String>, score: Score, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            skill_id: skill_id.into(),
            score,
            snapshot_date: now.date_naive(),
            created_at: now,
        }
    }
}
