//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, foreign_keys ON (needed for cascading deletes),
//! configurable busy_timeout.

use rusqlite::Connection;

use skillwise_core::errors::SkillwiseResult;

use crate::to_storage_err;

/// Apply performance and safety pragmas to a connection.
/// In-memory databases ignore the WAL request and stay in `memory` mode.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u64) -> SkillwiseResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = {busy_timeout_ms};
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> SkillwiseResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}

/// Check that foreign key enforcement is on.
pub fn foreign_keys_enabled(conn: &Connection) -> SkillwiseResult<bool> {
    let on: i64 = conn
        .pragma_query_value(None, "foreign_keys", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(on == 1)
}
