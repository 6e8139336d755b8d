//! # skillwise-core
//!
//! Foundation crate for the Skillwise tracker.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod skill;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SkillwiseConfig;
pub use errors::{SkillwiseError, SkillwiseResult};
pub use skill::{Activity, ActivityKind, FreshnessTier, Score, Skill, SkillSnapshot};
