use serde::{Deserialize, Serialize};

use super::defaults;

/// SQLite storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    pub db_path: String,
    /// How long a connection waits on a locked database (milliseconds).
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_PATH.to_string(),
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
