//! The single SQLite connection, serialized behind a mutex.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use skillwise_core::errors::SkillwiseResult;

use crate::pragmas;
use crate::to_storage_err;

pub struct SerializedConnection {
    conn: Mutex<Connection>,
}

impl SerializedConnection {
    pub fn open(path: &Path, busy_timeout_ms: u64) -> SkillwiseResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> SkillwiseResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn, 0)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> SkillwiseResult<T>
    where
        F: FnOnce(&Connection) -> SkillwiseResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned"))?;
        f(&guard)
    }
}
