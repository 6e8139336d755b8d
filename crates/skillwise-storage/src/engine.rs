//! StorageEngine: owns the connection, runs migrations on open,
//! implements ISkillStorage.

use std::path::Path;

use skillwise_core::config::StorageConfig;
use skillwise_core::errors::SkillwiseResult;
use skillwise_core::skill::{Activity, Skill, SkillSnapshot};
use skillwise_core::traits::ISkillStorage;

use crate::connection::SerializedConnection;
use crate::migrations;
use crate::queries::{activity_ops, skill_crud, snapshot_ops};

/// The main storage engine.
pub struct StorageEngine {
    conn: SerializedConnection,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> SkillwiseResult<Self> {
        Self::open_with_timeout(path, StorageConfig::default().busy_timeout_ms)
    }

    /// Open the database named in the storage config.
    pub fn from_config(config: &StorageConfig) -> SkillwiseResult<Self> {
        Self::open_with_timeout(Path::new(&config.db_path), config.busy_timeout_ms)
    }

    fn open_with_timeout(path: &Path, busy_timeout_ms: u64) -> SkillwiseResult<Self> {
        let engine = Self {
            conn: SerializedConnection::open(path, busy_timeout_ms)?,
        };
        engine.initialize()?;
        tracing::info!(path = %path.display(), "opened skill database");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> SkillwiseResult<Self> {
        let engine = Self {
            conn: SerializedConnection::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> SkillwiseResult<()> {
        self.conn.with_conn(|conn| {
            let applied = migrations::run_migrations(conn)?;
            if applied > 0 {
                tracing::info!(applied, "schema migrations applied");
            }
            Ok(())
        })
    }

    /// Current schema version.
    pub fn schema_version(&self) -> SkillwiseResult<u32> {
        self.conn.with_conn(migrations::current_version)
    }

    /// Direct access to the connection for maintenance and diagnostics.
    pub fn connection(&self) -> &SerializedConnection {
        &self.conn
    }
}

impl ISkillStorage for StorageEngine {
    fn create_skill(&self, skill: &Skill) -> SkillwiseResult<()> {
        self.conn.with_conn(|conn| skill_crud::insert_skill(conn, skill))?;
        tracing::debug!(skill_id = %skill.id, user_id = %skill.user_id, "skill created");
        Ok(())
    }

    fn get_skill(&self, user_id: &str, id: &str) -> SkillwiseResult<Option<Skill>> {
        self.conn.with_conn(|conn| skill_crud::get_skill(conn, user_id, id))
    }

    fn update_skill(&self, skill: &Skill) -> SkillwiseResult<()> {
        self.conn.with_conn(|conn| skill_crud::update_skill(conn, skill))
    }

    fn delete_skill(&self, user_id: &str, id: &str) -> SkillwiseResult<bool> {
        let deleted = self
            .conn
            .with_conn(|conn| skill_crud::delete_skill(conn, user_id, id))?;
        tracing::debug!(skill_id = %id, deleted, "skill delete");
        Ok(deleted)
    }

    fn list_skills(&self, user_id: &str) -> SkillwiseResult<Vec<Skill>> {
        self.conn.with_conn(|conn| skill_crud::list_skills(conn, user_id))
    }

    fn create_activity(&self, activity: &Activity) -> SkillwiseResult<()> {
        self.conn
            .with_conn(|conn| activity_ops::insert_activity(conn, activity))
    }

    fn recent_activities(&self, user_id: &str, limit: usize) -> SkillwiseResult<Vec<Activity>> {
        self.conn
            .with_conn(|conn| activity_ops::recent_activities(conn, user_id, limit))
    }

    fn activities_for_skill(
        &self,
        user_id: &str,
        skill_id: &str,
    ) -> SkillwiseResult<Vec<Activity>> {
        self.conn
            .with_conn(|conn| activity_ops::activities_for_skill(conn, user_id, skill_id))
    }

    fn record_activity(
        &self,
        activity: &Activity,
        checkpoint: &mut dyn FnMut(&Skill) -> Skill,
    ) -> SkillwiseResult<Skill> {
        let skill = self
            .conn
            .with_conn(|conn| activity_ops::record_activity(conn, activity, checkpoint))?;
        tracing::debug!(
            activity_id = %activity.id,
            skill_id = %skill.id,
            score = skill.current_score.value(),
            "activity recorded"
        );
        Ok(skill)
    }

    fn record_snapshot(&self, snapshot: &SkillSnapshot) -> SkillwiseResult<()> {
        self.conn
            .with_conn(|conn| snapshot_ops::insert_snapshot(conn, snapshot))
    }

    fn snapshots_for_skill(
        &self,
        user_id: &str,
        skill_id: &str,
    ) -> SkillwiseResult<Vec<SkillSnapshot>> {
        self.conn
            .with_conn(|conn| snapshot_ops::snapshots_for_skill(conn, user_id, skill_id))
    }
}
