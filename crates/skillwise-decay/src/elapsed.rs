use chrono::{DateTime, Utc};

use skillwise_core::constants::MILLIS_PER_DAY;

/// Whole days between two instants, rounded up.
///
/// Order doesn't matter. Identical instants give 0; anything more than
/// zero but under a day counts as 1.
pub fn days_between(past: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (now - past).num_milliseconds().unsigned_abs();
    millis.div_ceil(MILLIS_PER_DAY as u64)
}

/// Whole days from `past` to the current wall-clock time, rounded up.
pub fn days_since(past: DateTime<Utc>) -> u64 {
    days_between(past, Utc::now())
}
