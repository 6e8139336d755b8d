pub mod activity;
pub mod base;
pub mod draft;
pub mod freshness;
pub mod score;
pub mod snapshot;

pub use activity::{Activity, ActivityKind};
pub use base::Skill;
pub use draft::{NewActivity, NewSkill};
pub use freshness::FreshnessTier;
pub use score::Score;
pub use snapshot::SkillSnapshot;
