use skillwise_core::skill::FreshnessTier;

/// Map a score to its freshness tier. Each tier's lower bound is inclusive:
/// exactly 90 is `Excellent`, 89.99 is `Good`.
pub fn classify(score: f64) -> FreshnessTier {
    if score >= FreshnessTier::EXCELLENT_MIN {
        FreshnessTier::Excellent
    } else if score >= FreshnessTier::GOOD_MIN {
        FreshnessTier::Good
    } else if score >= FreshnessTier::FAIR_MIN {
        FreshnessTier::Fair
    } else if score >= FreshnessTier::POOR_MIN {
        FreshnessTier::Poor
    } else {
        FreshnessTier::Critical
    }
}
