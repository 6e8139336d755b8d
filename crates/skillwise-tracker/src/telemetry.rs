//! Structured logging setup and span names.

use tracing_subscriber::EnvFilter;

use skillwise_core::config::ObservabilityConfig;
use skillwise_core::errors::{SkillwiseError, SkillwiseResult};

/// Span names as constants for programmatic use.
pub mod names {
    pub const ADD_SKILL: &str = "skillwise.add_skill";
    pub const LOG_ACTIVITY: &str = "skillwise.log_activity";
    pub const REVISION: &str = "skillwise.revision";
    pub const ANALYTICS: &str = "skillwise.analytics";
    pub const SNAPSHOT: &str = "skillwise.snapshot";
}

/// Install the global subscriber. `RUST_LOG` wins over `log_level`.
/// Fails if a subscriber is already installed.
pub fn init(config: &ObservabilityConfig) -> SkillwiseResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            SkillwiseError::ConfigError(format!("bad log_level '{}': {e}", config.log_level))
        })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| SkillwiseError::ConfigError(format!("tracing init: {e}")))
}
