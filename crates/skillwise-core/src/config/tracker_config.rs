use serde::{Deserialize, Serialize};

use super::defaults;

/// Tracker service configuration: list sizes and reporting windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// How many activities `recent_activities` returns.
    pub recent_activity_limit: usize,
    /// Healthy skills listed by name in a revision plan.
    pub healthy_preview: usize,
    /// Categories listed in the analytics breakdown.
    pub top_categories: usize,
    /// Window for the "recent activity" count in analytics (days).
    pub activity_window_days: i64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            recent_activity_limit: defaults::DEFAULT_RECENT_ACTIVITY_LIMIT,
            healthy_preview: defaults::DEFAULT_HEALTHY_PREVIEW,
            top_categories: defaults::DEFAULT_TOP_CATEGORIES,
            activity_window_days: defaults::DEFAULT_ACTIVITY_WINDOW_DAYS,
        }
    }
}
