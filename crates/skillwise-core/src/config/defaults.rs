// Storage
pub const DEFAULT_DB_PATH: &str = "skillwise.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

// Decay
pub const DEFAULT_DECAY_RATE: f64 = 0.05;
pub const DEFAULT_MIN_DECAY_RATE: f64 = 0.01;
pub const DEFAULT_MAX_DECAY_RATE: f64 = 0.15;
pub const DEFAULT_PROJECTION_HORIZON_DAYS: u32 = 30;

// Tracker
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 50;
pub const DEFAULT_HEALTHY_PREVIEW: usize = 3;
pub const DEFAULT_TOP_CATEGORIES: usize = 5;
pub const DEFAULT_ACTIVITY_WINDOW_DAYS: i64 = 7;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
