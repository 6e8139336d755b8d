use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Rate assigned to new skills that don't specify one.
    pub default_decay_rate: f64,
    /// Slowest accepted rate for a new skill.
    pub min_decay_rate: f64,
    /// Fastest accepted rate for a new skill.
    pub max_decay_rate: f64,
    /// Default number of days covered by a projection curve.
    pub projection_horizon_days: u32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            default_decay_rate: defaults::DEFAULT_DECAY_RATE,
            min_decay_rate: defaults::DEFAULT_MIN_DECAY_RATE,
            max_decay_rate: defaults::DEFAULT_MAX_DECAY_RATE,
            projection_horizon_days: defaults::DEFAULT_PROJECTION_HORIZON_DAYS,
        }
    }
}
