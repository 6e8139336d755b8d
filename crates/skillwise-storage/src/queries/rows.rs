//! Raw row shapes and their conversion to domain types.
//!
//! Timestamps are stored as fixed-width RFC 3339 UTC text with nanoseconds,
//! so string ordering in SQL matches chronological ordering and values read
//! back compare equal to what was written.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::Row;

use skillwise_core::errors::SkillwiseResult;
use skillwise_core::skill::{Activity, ActivityKind, Score, Skill, SkillSnapshot};

use crate::corrupt_row;

pub const SNAPSHOT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a timestamp for storage.
pub fn fmt_ts(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_ts(table: &str, column: &str, raw: &str) -> SkillwiseResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| corrupt_row(table, format!("{column} '{raw}': {e}")))
}

pub const SKILL_COLUMNS: &str = "id, user_id, name, category, initial_proficiency, current_score, \
     decay_rate, last_practiced_at, created_at, updated_at";

pub struct SkillRow {
    id: String,
    user_id: String,
    name: String,
    category: String,
    initial_proficiency: i64,
    current_score: f64,
    decay_rate: f64,
    last_practiced_at: String,
    created_at: String,
    updated_at: String,
}

impl SkillRow {
    /// Read a row selected with [`SKILL_COLUMNS`].
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            category: row.get(3)?,
            initial_proficiency: row.get(4)?,
            current_score: row.get(5)?,
            decay_rate: row.get(6)?,
            last_practiced_at: row.get(7)?,
            created_at: row.get(8)?,
            updated_at: row.get(9)?,
        })
    }

    pub fn into_skill(self) -> SkillwiseResult<Skill> {
        let initial_proficiency = u8::try_from(self.initial_proficiency).map_err(|_| {
            corrupt_row(
                "skills",
                format!("initial_proficiency {} out of range", self.initial_proficiency),
            )
        })?;
        Ok(Skill {
            last_practiced_at: parse_ts("skills", "last_practiced_at", &self.last_practiced_at)?,
            created_at: parse_ts("skills", "created_at", &self.created_at)?,
            updated_at: parse_ts("skills", "updated_at", &self.updated_at)?,
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            category: self.category,
            initial_proficiency,
            current_score: Score::new(self.current_score),
            decay_rate: self.decay_rate,
        })
    }
}

pub const ACTIVITY_COLUMNS: &str = "id, user_id, skill_id, activity_type, duration_minutes, \
     difficulty, notes, practiced_at, created_at";

pub struct ActivityRow {
    id: String,
    user_id: String,
    skill_id: String,
    activity_type: String,
    duration_minutes: i64,
    difficulty: i64,
    notes: Option<String>,
    practiced_at: String,
    created_at: String,
}

impl ActivityRow {
    /// Read a row selected with [`ACTIVITY_COLUMNS`].
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            skill_id: row.get(2)?,
            activity_type: row.get(3)?,
            duration_minutes: row.get(4)?,
            difficulty: row.get(5)?,
            notes: row.get(6)?,
            practiced_at: row.get(7)?,
            created_at: row.get(8)?,
        })
    }

    pub fn into_activity(self) -> SkillwiseResult<Activity> {
        let kind: ActivityKind = self
            .activity_type
            .parse()
            .map_err(|e| corrupt_row("activities", format!("{e}")))?;
        let duration_minutes = u32::try_from(self.duration_minutes).map_err(|_| {
            corrupt_row(
                "activities",
                format!("duration_minutes {} out of range", self.duration_minutes),
            )
        })?;
        let difficulty = u8::try_from(self.difficulty).map_err(|_| {
            corrupt_row("activities", format!("difficulty {} out of range", self.difficulty))
        })?;
        Ok(Activity {
            practiced_at: parse_ts("activities", "practiced_at", &self.practiced_at)?,
            created_at: parse_ts("activities", "created_at", &self.created_at)?,
            id: self.id,
            user_id: self.user_id,
            skill_id: self.skill_id,
            kind,
            duration_minutes,
            difficulty,
            notes: self.notes,
        })
    }
}

pub const SNAPSHOT_COLUMNS: &str = "id, skill_id, score, snapshot_date, created_at";

pub struct SnapshotRow {
    id: String,
    skill_id: String,
    score: f64,
    snapshot_date: String,
    created_at: String,
}

impl SnapshotRow {
    /// Read a row selected with [`SNAPSHOT_COLUMNS`].
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            skill_id: row.get(1)?,
            score: row.get(2)?,
            snapshot_date: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    pub fn into_snapshot(self) -> SkillwiseResult<SkillSnapshot> {
        let snapshot_date = NaiveDate::parse_from_str(&self.snapshot_date, SNAPSHOT_DATE_FORMAT)
            .map_err(|e| {
                corrupt_row(
                    "skill_snapshots",
                    format!("snapshot_date '{}': {e}", self.snapshot_date),
                )
            })?;
        Ok(SkillSnapshot {
            created_at: parse_ts("skill_snapshots", "created_at", &self.created_at)?,
            id: self.id,
            skill_id: self.skill_id,
            score: Score::new(self.score),
            snapshot_date,
        })
    }
}
