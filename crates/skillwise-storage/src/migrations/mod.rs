//! Versioned schema migrations. Each migration runs once, inside its own
//! transaction, and records its version in `schema_version`.

mod v001_skills_activities;
mod v002_skill_snapshots;

use rusqlite::{params, Connection};

use skillwise_core::errors::{SkillwiseError, SkillwiseResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> SkillwiseResult<()>;

/// All migrations in application order.
const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_skills_activities::migrate),
    (2, v002_skill_snapshots::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Bring the schema up to [`LATEST_VERSION`]. Returns how many migrations ran.
pub fn run_migrations(conn: &Connection) -> SkillwiseResult<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    let mut applied = 0;

    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(format!("migration {version} begin: {e}")))?;

        let result = migrate(&tx).and_then(|()| {
            tx.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![version],
            )
            .map(|_| ())
            .map_err(|e| to_storage_err(e.to_string()))
        });

        match result {
            Ok(()) => {
                tx.commit()
                    .map_err(|e| to_storage_err(format!("migration {version} commit: {e}")))?;
                tracing::debug!(version, "applied schema migration");
                applied += 1;
            }
            Err(e) => {
                let _ = tx.rollback();
                return Err(SkillwiseError::StorageError(StorageError::MigrationFailed {
                    version,
                    reason: e.to_string(),
                }));
            }
        }
    }

    Ok(applied)
}

/// Highest applied migration, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> SkillwiseResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
