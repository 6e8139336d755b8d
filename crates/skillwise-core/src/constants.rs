/// Skillwise version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of every score.
pub const MAX_SCORE: f64 = 100.0;

/// Lower bound of every score.
pub const MIN_SCORE: f64 = 0.0;

/// Minutes of practice worth one point of boost.
pub const MINUTES_PER_BOOST_POINT: f64 = 10.0;

/// Cap on the duration part of an activity boost (reached at 100 minutes).
pub const MAX_DURATION_BOOST: f64 = 10.0;

/// Multiplier added per difficulty level above 1.
pub const DIFFICULTY_STEP: f64 = 0.2;

/// Lowest and highest accepted difficulty ratings.
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Milliseconds in one day, used for elapsed-day arithmetic.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Suggested skill categories offered when registering a skill.
pub const SKILL_CATEGORIES: [&str; 9] = [
    "Programming Language",
    "Framework",
    "Database",
    "DevOps",
    "Data Structures",
    "Algorithms",
    "System Design",
    "Tools",
    "Other",
];
