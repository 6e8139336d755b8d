//! v001: skills and activities.

use rusqlite::Connection;

use skillwise_core::errors::SkillwiseResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> SkillwiseResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS skills (
            id                  TEXT PRIMARY KEY,
            user_id             TEXT NOT NULL,
            name                TEXT NOT NULL,
            category            TEXT NOT NULL,
            initial_proficiency INTEGER NOT NULL CHECK (initial_proficiency BETWEEN 0 AND 100),
            current_score       REAL NOT NULL CHECK (current_score BETWEEN 0 AND 100),
            decay_rate          REAL NOT NULL CHECK (decay_rate > 0),
            last_practiced_at   TEXT NOT NULL,
            created_at          TEXT NOT NULL,
            updated_at          TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_skills_user ON skills(user_id, created_at);

        CREATE TABLE IF NOT EXISTS activities (
            id               TEXT PRIMARY KEY,
            user_id          TEXT NOT NULL,
            skill_id         TEXT NOT NULL REFERENCES skills(id) ON DELETE CASCADE,
            activity_type    TEXT NOT NULL,
            duration_minutes INTEGER NOT NULL CHECK (duration_minutes > 0),
            difficulty       INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 5),
            notes            TEXT,
            practiced_at     TEXT NOT NULL,
            created_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_activities_user ON activities(user_id, practiced_at);
        CREATE INDEX IF NOT EXISTS idx_activities_skill ON activities(skill_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
