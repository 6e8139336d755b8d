use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// How fresh a skill is, derived from its current score. Never stored.
///
/// Variants are declared worst-first so the derived ordering reads
/// `Critical < Poor < Fair < Good < Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessTier {
    Critical,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl FreshnessTier {
    /// Inclusive lower bound of each tier.
    pub const EXCELLENT_MIN: f64 = 90.0;
    pub const GOOD_MIN: f64 = 70.0;
    pub const FAIR_MIN: f64 = 50.0;
    pub const POOR_MIN: f64 = 30.0;

    /// All tiers, best first.
    pub const ALL: [FreshnessTier; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Fair,
        Self::Poor,
        Self::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Critical => "critical",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for FreshnessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
