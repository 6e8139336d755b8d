use crate::errors::SkillwiseResult;
use crate::skill::{Activity, Skill, SkillSnapshot};

/// CRUD over skills, activities, and snapshots. Every lookup is scoped by
/// the owning user; another user's record behaves as if it did not exist.
pub trait ISkillStorage: Send + Sync {
    // --- Skills ---
    fn create_skill(&self, skill: &Skill) -> SkillwiseResult<()>;
    fn get_skill(&self, user_id: &str, id: &str) -> SkillwiseResult<Option<Skill>>;
    fn update_skill(&self, skill: &Skill) -> SkillwiseResult<()>;
    /// Removes the skill with its activities and snapshots. Returns whether a row was deleted.
    fn delete_skill(&self, user_id: &str, id: &str) -> SkillwiseResult<bool>;
    /// Newest first.
    fn list_skills(&self, user_id: &str) -> SkillwiseResult<Vec<Skill>>;

    // --- Activities ---
    fn create_activity(&self, activity: &Activity) -> SkillwiseResult<()>;
    /// Most recently practiced first.
    fn recent_activities(&self, user_id: &str, limit: usize) -> SkillwiseResult<Vec<Activity>>;
    fn activities_for_skill(&self, user_id: &str, skill_id: &str)
        -> SkillwiseResult<Vec<Activity>>;
    /// Insert the activity and checkpoint its skill in one transaction.
    /// `checkpoint` receives the skill as stored at that moment and returns
    /// the row to write; the written row is returned.
    fn record_activity(
        &self,
        activity: &Activity,
        checkpoint: &mut dyn FnMut(&Skill) -> Skill,
    ) -> SkillwiseResult<Skill>;

    // --- Snapshots ---
    fn record_snapshot(&self, snapshot: &SkillSnapshot) -> SkillwiseResult<()>;
    /// Oldest first.
    fn snapshots_for_skill(&self, user_id: &str, skill_id: &str)
        -> SkillwiseResult<Vec<SkillSnapshot>>;
}
