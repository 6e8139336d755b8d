//! Score snapshot inserts and history reads.

use rusqlite::{params, Connection};

use skillwise_core::errors::SkillwiseResult;
use skillwise_core::skill::SkillSnapshot;

use super::rows::{fmt_ts, SnapshotRow, SNAPSHOT_COLUMNS, SNAPSHOT_DATE_FORMAT};
use crate::to_storage_err;

pub fn insert_snapshot(conn: &Connection, snapshot: &SkillSnapshot) -> SkillwiseResult<()> {
    conn.execute(
        "INSERT INTO skill_snapshots (id, skill_id, score, snapshot_date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            snapshot.id,
            snapshot.skill_id,
            snapshot.score.value(),
            snapshot.snapshot_date.format(SNAPSHOT_DATE_FORMAT).to_string(),
            fmt_ts(snapshot.created_at),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_snapshot: {e}")))?;
    Ok(())
}

/// History of one of the user's skills; empty for a skill the user does not own.
pub fn snapshots_for_skill(
    conn: &Connection,
    user_id: &str,
    skill_id: &str,
) -> SkillwiseResult<Vec<SkillSnapshot>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {SNAPSHOT_COLUMNS} FROM skill_snapshots
             WHERE skill_id = ?1
               AND skill_id IN (SELECT id FROM skills WHERE id = ?1 AND user_id = ?2)
             ORDER BY snapshot_date ASC, created_at ASC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![skill_id, user_id], SnapshotRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut snapshots = Vec::new();
    for row in rows {
        let row = row.map_err(|e| to_storage_err(e.to_string()))?;
        snapshots.push(row.into_snapshot()?);
    }
    Ok(snapshots)
}
