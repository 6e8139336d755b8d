use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use skillwise_core::config::{DecayConfig, SkillwiseConfig, TrackerConfig};
use skillwise_core::errors::{SkillwiseError, SkillwiseResult};
use skillwise_core::skill::{Activity, NewActivity, NewSkill, Skill, SkillSnapshot};
use skillwise_core::traits::ISkillStorage;
use skillwise_decay::{ActivityOutcome, CurvePoint, DecayEngine, SkillStatus};
use skillwise_storage::StorageEngine;

use crate::analytics::{self, AnalyticsSummary};
use crate::revision::{self, RevisionPlan};
use crate::telemetry::names;
use crate::validation;

/// Result of logging one practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedActivity {
    pub activity: Activity,
    /// The skill as persisted after the boost.
    pub skill: Skill,
    pub outcome: ActivityOutcome,
}

/// Skill tracking service. Stored scores are checkpoints; every read
/// applies decay up to `now` without writing it back, and every logged
/// activity writes a new checkpoint.
pub struct SkillTracker<S: ISkillStorage> {
    store: S,
    engine: DecayEngine,
    config: TrackerConfig,
}

impl SkillTracker<StorageEngine> {
    /// Open the configured SQLite database and build a tracker over it.
    pub fn open(config: &SkillwiseConfig) -> SkillwiseResult<Self> {
        let store = StorageEngine::from_config(&config.storage)?;
        Ok(Self::new(store, config.decay.clone(), config.tracker.clone()))
    }
}

impl<S: ISkillStorage> SkillTracker<S> {
    pub fn new(store: S, decay: DecayConfig, config: TrackerConfig) -> Self {
        Self {
            store,
            engine: DecayEngine::with_config(decay),
            config,
        }
    }

    /// Tracker with default decay and reporting settings.
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, DecayConfig::default(), TrackerConfig::default())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &DecayEngine {
        &self.engine
    }

    /// Register a new skill starting at its initial proficiency.
    pub fn add_skill(
        &self,
        user_id: &str,
        draft: NewSkill,
        now: DateTime<Utc>,
    ) -> SkillwiseResult<Skill> {
        let _span = tracing::info_span!(names::ADD_SKILL, user_id = %user_id).entered();
        let rate = validation::validate_new_skill(&draft, self.engine.config())?;

        let skill = Skill::new(
            user_id,
            draft.name.trim(),
            draft.category.trim(),
            draft.initial_proficiency,
            rate,
            now,
        );
        self.store.create_skill(&skill)?;
        tracing::info!(
            skill_id = %skill.id,
            name = %skill.name,
            decay_rate = rate,
            "skill registered"
        );
        Ok(skill)
    }

    /// One skill with its score decayed to `now`.
    pub fn skill(&self, user_id: &str, id: &str, now: DateTime<Utc>) -> SkillwiseResult<Skill> {
        let stored = self.require_skill(user_id, id)?;
        Ok(stored.with_score(self.engine.current_score(&stored, now)))
    }

    /// All of a user's skills, newest first, with scores decayed to `now`.
    pub fn skills(&self, user_id: &str, now: DateTime<Utc>) -> SkillwiseResult<Vec<Skill>> {
        let stored = self.store.list_skills(user_id)?;
        Ok(stored
            .iter()
            .map(|s| s.with_score(self.engine.current_score(s, now)))
            .collect())
    }

    /// Skill list rows: decayed score, freshness tier, days idle.
    pub fn skill_statuses(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> SkillwiseResult<Vec<SkillStatus>> {
        let stored = self.store.list_skills(user_id)?;
        Ok(self.engine.evaluate_batch(&stored, now))
    }

    /// Record practice: decay the skill to `now`, add the boost (capped at
    /// 100), and persist the activity together with the new checkpoint.
    /// The decay and boost are computed from the row read inside the write
    /// transaction, so overlapping calls each keep their boost.
    pub fn log_activity(
        &self,
        user_id: &str,
        draft: NewActivity,
        now: DateTime<Utc>,
    ) -> SkillwiseResult<LoggedActivity> {
        let _span = tracing::info_span!(
            names::LOG_ACTIVITY,
            user_id = %user_id,
            skill_id = %draft.skill_id
        )
        .entered();
        validation::validate_new_activity(&draft)?;

        let activity = Activity::new(
            user_id,
            draft.skill_id,
            draft.kind,
            draft.duration_minutes,
            draft.difficulty,
            draft.notes,
            now,
        );
        let engine = &self.engine;
        let mut applied = None;
        let skill = self.store.record_activity(&activity, &mut |current: &Skill| {
            let outcome = engine.apply_activity(current, &activity, now);
            applied = Some(outcome);
            let mut next = current.clone();
            next.current_score = outcome.new_score;
            next.last_practiced_at = now;
            next.updated_at = now;
            next
        })?;
        let outcome = applied.ok_or_else(|| SkillwiseError::SkillNotFound {
            id: activity.skill_id.clone(),
        })?;

        tracing::info!(
            activity_id = %activity.id,
            kind = %activity.kind,
            boost = outcome.boost,
            decayed = outcome.decayed_score.value(),
            new_score = outcome.new_score.value(),
            "activity logged"
        );
        Ok(LoggedActivity {
            activity,
            skill,
            outcome,
        })
    }

    pub fn delete_skill(&self, user_id: &str, id: &str) -> SkillwiseResult<()> {
        if !self.store.delete_skill(user_id, id)? {
            return Err(SkillwiseError::SkillNotFound { id: id.to_string() });
        }
        tracing::info!(skill_id = %id, "skill deleted");
        Ok(())
    }

    /// Latest activities, newest first, up to the configured limit.
    pub fn recent_activities(&self, user_id: &str) -> SkillwiseResult<Vec<Activity>> {
        self.store
            .recent_activities(user_id, self.config.recent_activity_limit)
    }

    /// Activities for one skill, newest first.
    pub fn skill_activities(&self, user_id: &str, skill_id: &str) -> SkillwiseResult<Vec<Activity>> {
        self.require_skill(user_id, skill_id)?;
        self.store.activities_for_skill(user_id, skill_id)
    }

    /// What to revise, based on scores decayed to `now`.
    pub fn revision_plan(&self, user_id: &str, now: DateTime<Utc>) -> SkillwiseResult<RevisionPlan> {
        let _span = tracing::debug_span!(names::REVISION, user_id = %user_id).entered();
        let skills = self.skills(user_id, now)?;
        let plan = revision::plan(&skills, self.config.healthy_preview);
        tracing::debug!(
            critical = plan.critical.len(),
            warning = plan.warning.len(),
            "revision plan built"
        );
        Ok(plan)
    }

    /// Aggregate statistics over decayed skills and recent activities.
    pub fn analytics(&self, user_id: &str, now: DateTime<Utc>) -> SkillwiseResult<AnalyticsSummary> {
        let _span = tracing::debug_span!(names::ANALYTICS, user_id = %user_id).entered();
        let skills = self.skills(user_id, now)?;
        let activities = self.recent_activities(user_id)?;
        let summary = analytics::summarize(
            &skills,
            &activities,
            now,
            self.config.activity_window_days,
            self.config.top_categories,
        );
        tracing::debug!(
            skills = summary.skill_count,
            activities = activities.len(),
            "analytics computed"
        );
        Ok(summary)
    }

    /// Projected scores for the next `horizon_days` (configured default when `None`).
    pub fn projection(
        &self,
        user_id: &str,
        skill_id: &str,
        now: DateTime<Utc>,
        horizon_days: Option<u32>,
    ) -> SkillwiseResult<Vec<CurvePoint>> {
        let skill = self.require_skill(user_id, skill_id)?;
        Ok(self.engine.projection(&skill, now, horizon_days).collect())
    }

    /// Record each skill's decayed score at `now` as a snapshot.
    pub fn snapshot_all(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> SkillwiseResult<Vec<SkillSnapshot>> {
        let _span = tracing::info_span!(names::SNAPSHOT, user_id = %user_id).entered();
        let mut snapshots = Vec::new();
        for skill in self.skills(user_id, now)? {
            let snapshot = SkillSnapshot::new(&skill.id, skill.current_score, now);
            self.store.record_snapshot(&snapshot)?;
            snapshots.push(snapshot);
        }
        tracing::info!(count = snapshots.len(), "snapshots recorded");
        Ok(snapshots)
    }

    /// Snapshot history for one skill, oldest first.
    pub fn history(&self, user_id: &str, skill_id: &str) -> SkillwiseResult<Vec<SkillSnapshot>> {
        self.require_skill(user_id, skill_id)?;
        self.store.snapshots_for_skill(user_id, skill_id)
    }

    fn require_skill(&self, user_id: &str, id: &str) -> SkillwiseResult<Skill> {
        self.store
            .get_skill(user_id, id)?
            .ok_or_else(|| SkillwiseError::SkillNotFound { id: id.to_string() })
    }
}
