use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::SkillwiseError;

/// The kinds of practice an activity can record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Coding,
    Reading,
    Project,
    #[default]
    Practice,
    Tutorial,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        Self::Coding,
        Self::Reading,
        Self::Project,
        Self::Practice,
        Self::Tutorial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Reading => "reading",
            Self::Project => "project",
            Self::Practice => "practice",
            Self::Tutorial => "tutorial",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = SkillwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SkillwiseError::InvalidInput {
                field: "activity_type".into(),
                reason: format!("unknown activity kind '{s}'"),
            })
    }
}

/// A logged practice session against one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Activity {
    /// UUID v4 identifier.
    pub id: String,
    pub user_id: String,
    /// The skill this activity was practiced for.
    pub skill_id: String,
    #[serde(rename = "activity_type")]
    pub kind: ActivityKind,
    /// Always positive.
    pub duration_minutes: u32,
    /// 1 (easy) through 5 (hard).
    pub difficulty: u8,
    pub notes: Option<String>,
    pub practiced_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Build a fresh activity practiced at `now` with a new id.
    pub fn new(
        user_id: impl Into<String>,
        skill_id: impl Into<String>,
        kind: ActivityKind,
        duration_minutes: u32,
        difficulty: u8,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            skill_id: skill_id.into(),
            kind,
            duration_minutes,
            difficulty,
            notes: notes.filter(|n| !n.trim().is_empty()),
            practiced_at: now,
            created_at: now,
        }
    }
}
