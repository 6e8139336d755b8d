pub mod decay_config;
pub mod defaults;
pub mod observability_config;
pub mod storage_config;
pub mod tracker_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{SkillwiseError, SkillwiseResult};

pub use decay_config::DecayConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;
pub use tracker_config::TrackerConfig;

/// Top-level configuration. Every section falls back to its defaults,
/// so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillwiseConfig {
    pub storage: StorageConfig,
    pub decay: DecayConfig,
    pub tracker: TrackerConfig,
    pub observability: ObservabilityConfig,
}

impl SkillwiseConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(input: &str) -> SkillwiseResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| SkillwiseError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> SkillwiseResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SkillwiseError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
    }

    /// Reject settings that would break decay-rate invariants.
    pub fn validate(&self) -> SkillwiseResult<()> {
        let d = &self.decay;
        if d.min_decay_rate <= 0.0 {
            return Err(SkillwiseError::ConfigError(
                "decay.min_decay_rate must be positive".into(),
            ));
        }
        if d.min_decay_rate > d.max_decay_rate {
            return Err(SkillwiseError::ConfigError(format!(
                "decay.min_decay_rate {} exceeds decay.max_decay_rate {}",
                d.min_decay_rate, d.max_decay_rate
            )));
        }
        if !(d.min_decay_rate..=d.max_decay_rate).contains(&d.default_decay_rate) {
            return Err(SkillwiseError::ConfigError(format!(
                "decay.default_decay_rate {} outside [{}, {}]",
                d.default_decay_rate, d.min_decay_rate, d.max_decay_rate
            )));
        }
        Ok(())
    }
}
