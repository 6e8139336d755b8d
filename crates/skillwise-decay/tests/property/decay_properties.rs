use chrono::DateTime;
use proptest::prelude::*;
use skillwise_core::skill::FreshnessTier;
use skillwise_decay::*;

proptest! {
    #[test]
    fn zero_elapsed_returns_base(
        base in 0.0f64..=100.0,
        rate in 0.001f64..1.0,
    ) {
        prop_assert_eq!(decayed_score(base, rate, 0.0), base);
    }

    #[test]
    fn decay_is_monotonic_and_bounded(
        base in 0.0f64..=100.0,
        rate in 0.001f64..1.0,
        d1 in 0.0f64..1000.0,
        extra in 0.0f64..1000.0,
    ) {
        let earlier = decayed_score(base, rate, d1);
        let later = decayed_score(base, rate, d1 + extra);
        prop_assert!(later <= earlier, "{} > {}", later, earlier);
        prop_assert!((0.0..=100.0).contains(&earlier));
        prop_assert!((0.0..=100.0).contains(&later));
    }

    #[test]
    fn boost_stays_within_range(
        minutes in 0.0f64..10_000.0,
        difficulty in 1u8..=5,
    ) {
        let boost = activity_boost(minutes, difficulty);
        prop_assert!((0.0..=18.0 + 1e-9).contains(&boost), "boost {}", boost);
    }

    #[test]
    fn boost_increases_with_difficulty(
        minutes in 1.0f64..500.0,
        difficulty in 1u8..5,
    ) {
        prop_assert!(activity_boost(minutes, difficulty + 1) > activity_boost(minutes, difficulty));
    }

    #[test]
    fn every_score_has_one_tier(score in 0.0f64..=100.0) {
        let matching: Vec<FreshnessTier> = FreshnessTier::ALL
            .into_iter()
            .filter(|t| match t {
                FreshnessTier::Excellent => score >= 90.0,
                FreshnessTier::Good => (70.0..90.0).contains(&score),
                FreshnessTier::Fair => (50.0..70.0).contains(&score),
                FreshnessTier::Poor => (30.0..50.0).contains(&score),
                FreshnessTier::Critical => score < 30.0,
            })
            .collect();
        prop_assert_eq!(matching, vec![classify(score)]);
    }

    #[test]
    fn forecast_lands_near_target(
        current in 10.0f64..=100.0,
        fraction in 0.05f64..0.95,
        rate in 0.01f64..0.15,
    ) {
        let target = current * fraction;
        let days = predict_days_until(current, target, rate).days().unwrap();
        let reached = decayed_score(current, rate, days as f64);
        // Rounding to whole days moves at most half a day either side.
        let tolerance = current * ((rate * 0.5).exp() - 1.0) + 1e-9;
        prop_assert!((reached - target).abs() <= tolerance, "reached {} target {}", reached, target);
    }

    #[test]
    fn curve_length_and_points(
        base in 0.0f64..=100.0,
        rate in 0.01f64..0.15,
        horizon in 0u32..400,
    ) {
        let curve = generate_curve(base, rate, horizon);
        prop_assert_eq!(curve.len(), horizon as usize + 1);
        for (i, point) in curve.iter().enumerate() {
            prop_assert_eq!(point.day, i as u32);
            prop_assert_eq!(point.score, decayed_score(base, rate, i as f64));
        }
    }

    #[test]
    fn repeated_calls_agree(
        base in 0.0f64..=100.0,
        target in -10.0f64..=100.0,
        rate in 0.01f64..0.15,
        days in 0.0f64..1000.0,
        minutes in 0.0f64..600.0,
        difficulty in 1u8..=5,
        past_ms in 0i64..4_000_000_000_000,
        now_ms in 0i64..4_000_000_000_000,
    ) {
        let past = DateTime::from_timestamp_millis(past_ms).unwrap();
        let now = DateTime::from_timestamp_millis(now_ms).unwrap();

        prop_assert_eq!(
            decayed_score(base, rate, days).to_bits(),
            decayed_score(base, rate, days).to_bits()
        );
        prop_assert_eq!(
            activity_boost(minutes, difficulty).to_bits(),
            activity_boost(minutes, difficulty).to_bits()
        );
        prop_assert_eq!(classify(base), classify(base));
        prop_assert_eq!(
            predict_days_until(base, target, rate),
            predict_days_until(base, target, rate)
        );
        prop_assert_eq!(days_between(past, now), days_between(past, now));
    }
}
