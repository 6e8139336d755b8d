//! v002: daily score snapshots.

use rusqlite::Connection;

use skillwise_core::errors::SkillwiseResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> SkillwiseResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS skill_snapshots (
            id            TEXT PRIMARY KEY,
            skill_id      TEXT NOT NULL REFERENCES skills(id) ON DELETE CASCADE,
            score         REAL NOT NULL,
            snapshot_date TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_snapshots_skill ON skill_snapshots(skill_id, snapshot_date);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
