//! Activity inserts and listings.

use rusqlite::{params, Connection, Transaction, TransactionBehavior};

use skillwise_core::errors::{SkillwiseError, SkillwiseResult};
use skillwise_core::skill::{Activity, Skill};

use super::rows::{fmt_ts, ActivityRow, ACTIVITY_COLUMNS};
use super::skill_crud;
use crate::to_storage_err;

pub fn insert_activity(conn: &Connection, activity: &Activity) -> SkillwiseResult<()> {
    conn.execute(
        "INSERT INTO activities (
            id, user_id, skill_id, activity_type, duration_minutes,
            difficulty, notes, practiced_at, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            activity.id,
            activity.user_id,
            activity.skill_id,
            activity.kind.as_str(),
            activity.duration_minutes,
            activity.difficulty,
            activity.notes,
            fmt_ts(activity.practiced_at),
            fmt_ts(activity.created_at),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_activity: {e}")))?;
    Ok(())
}

/// Insert the activity and checkpoint its skill atomically.
///
/// The skill is re-read inside an immediate transaction and handed to
/// `checkpoint`, which returns the row to write back. Concurrent writers
/// therefore always build on the latest checkpoint. Nothing is written
/// unless both statements succeed.
pub fn record_activity(
    conn: &Connection,
    activity: &Activity,
    checkpoint: &mut dyn FnMut(&Skill) -> Skill,
) -> SkillwiseResult<Skill> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(format!("record_activity begin: {e}")))?;

    let result = checkpoint_in_tx(&tx, activity, checkpoint);

    match result {
        Ok(skill) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("record_activity commit: {e}")))?;
            Ok(skill)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn checkpoint_in_tx(
    tx: &Connection,
    activity: &Activity,
    checkpoint: &mut dyn FnMut(&Skill) -> Skill,
) -> SkillwiseResult<Skill> {
    let current = skill_crud::get_skill(tx, &activity.user_id, &activity.skill_id)?.ok_or_else(
        || SkillwiseError::SkillNotFound {
            id: activity.skill_id.clone(),
        },
    )?;
    let next = checkpoint(&current);
    if next.id != current.id || next.user_id != current.user_id {
        return Err(SkillwiseError::invalid(
            "skill_id",
            format!("activity {} does not belong to skill {}", activity.id, next.id),
        ));
    }

    insert_activity(tx, activity)?;
    skill_crud::update_skill(tx, &next)?;
    Ok(next)
}

pub fn recent_activities(
    conn: &Connection,
    user_id: &str,
    limit: usize,
) -> SkillwiseResult<Vec<Activity>> {
    query_activities(
        conn,
        &format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities WHERE user_id = ?1
             ORDER BY practiced_at DESC, rowid DESC LIMIT ?2"
        ),
        params![user_id, limit as i64],
    )
}

pub fn activities_for_skill(
    conn: &Connection,
    user_id: &str,
    skill_id: &str,
) -> SkillwiseResult<Vec<Activity>> {
    query_activities(
        conn,
        &format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities WHERE user_id = ?1 AND skill_id = ?2
             ORDER BY practiced_at DESC, rowid DESC"
        ),
        params![user_id, skill_id],
    )
}

fn query_activities(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> SkillwiseResult<Vec<Activity>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, ActivityRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut activities = Vec::new();
    for row in rows {
        let row = row.map_err(|e| to_storage_err(e.to_string()))?;
        activities.push(row.into_activity()?);
    }
    Ok(activities)
}
