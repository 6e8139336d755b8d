//! # skillwise-tracker
//!
//! Application service over the scoring core and the skill store:
//! register skills, log practice, and report what needs revision.

pub mod analytics;
pub mod revision;
pub mod telemetry;
pub mod tracker;
pub mod validation;

pub use analytics::AnalyticsSummary;
pub use revision::RevisionPlan;
pub use tracker::{LoggedActivity, SkillTracker};
