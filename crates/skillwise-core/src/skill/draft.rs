//! Caller-supplied inputs for creating skills and logging activities.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::activity::ActivityKind;

/// Fields the user fills in when registering a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    pub initial_proficiency: u8,
    /// `None` uses the configured default decay rate.
    #[serde(default)]
    pub decay_rate: Option<f64>,
}

/// Fields the user fills in when logging practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewActivity {
    pub skill_id: String,
    #[serde(rename = "activity_type", default)]
    pub kind: ActivityKind,
    pub duration_minutes: u32,
    pub difficulty: u8,
    #[serde(default)]
    pub notes: Option<String>,
}
