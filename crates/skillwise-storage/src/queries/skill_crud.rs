//! Insert, get, update, delete, and list for skills.

use rusqlite::{params, Connection, OptionalExtension};

use skillwise_core::errors::{SkillwiseError, SkillwiseResult};
use skillwise_core::skill::Skill;

use super::rows::{fmt_ts, SkillRow, SKILL_COLUMNS};
use crate::to_storage_err;

pub fn insert_skill(conn: &Connection, skill: &Skill) -> SkillwiseResult<()> {
    conn.execute(
        "INSERT INTO skills (
            id, user_id, name, category, initial_proficiency, current_score,
            decay_rate, last_practiced_at, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            skill.id,
            skill.user_id,
            skill.name,
            skill.category,
            skill.initial_proficiency,
            skill.current_score.value(),
            skill.decay_rate,
            fmt_ts(skill.last_practiced_at),
            fmt_ts(skill.created_at),
            fmt_ts(skill.updated_at),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_skill: {e}")))?;
    Ok(())
}

pub fn get_skill(conn: &Connection, user_id: &str, id: &str) -> SkillwiseResult<Option<Skill>> {
    let row = conn
        .query_row(
            &format!("SELECT {SKILL_COLUMNS} FROM skills WHERE id = ?1 AND user_id = ?2"),
            params![id, user_id],
            SkillRow::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(SkillRow::into_skill).transpose()
}

/// Overwrite the mutable fields of an existing skill.
/// Fails with `SkillNotFound` when no row belongs to the skill's user.
pub fn update_skill(conn: &Connection, skill: &Skill) -> SkillwiseResult<()> {
    let changed = conn
        .execute(
            "UPDATE skills SET
                name = ?3, category = ?4, current_score = ?5, decay_rate = ?6,
                last_practiced_at = ?7, updated_at = ?8
             WHERE id = ?1 AND user_id = ?2",
            params![
                skill.id,
                skill.user_id,
                skill.name,
                skill.category,
                skill.current_score.value(),
                skill.decay_rate,
                fmt_ts(skill.last_practiced_at),
                fmt_ts(skill.updated_at),
            ],
        )
        .map_err(|e| to_storage_err(format!("update_skill: {e}")))?;
    if changed == 0 {
        return Err(SkillwiseError::SkillNotFound {
            id: skill.id.clone(),
        });
    }
    Ok(())
}

/// Activities and snapshots go with it via `ON DELETE CASCADE`.
pub fn delete_skill(conn: &Connection, user_id: &str, id: &str) -> SkillwiseResult<bool> {
    let changed = conn
        .execute(
            "DELETE FROM skills WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )
        .map_err(|e| to_storage_err(format!("delete_skill: {e}")))?;
    Ok(changed > 0)
}

pub fn list_skills(conn: &Connection, user_id: &str) -> SkillwiseResult<Vec<Skill>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {SKILL_COLUMNS} FROM skills WHERE user_id = ?1
             ORDER BY created_at DESC, rowid DESC"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id], SkillRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut skills = Vec::new();
    for row in rows {
        let row = row.map_err(|e| to_storage_err(e.to_string()))?;
        skills.push(row.into_skill()?);
    }
    Ok(skills)
}
