use proptest::prelude::*;
use skillwise_core::traits::ISkillStorage;
use skillwise_storage::StorageEngine;
use test_fixtures::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn stored_scores_roundtrip_exactly(
        score in 0.0f64..=100.0,
        rate in 0.01f64..=0.15,
        days_ago in 0i64..365,
    ) {
        let store = StorageEngine::open_in_memory().unwrap();
        let skill = make_skill("Prop", score, rate, days_ago);
        store.create_skill(&skill).unwrap();
        let loaded = store.get_skill(TEST_USER, &skill.id).unwrap().unwrap();
        prop_assert_eq!(loaded, skill);
    }

    #[test]
    fn recent_limit_is_respected(count in 0usize..20, limit in 0usize..25) {
        let store = StorageEngine::open_in_memory().unwrap();
        let skill = make_skill("Prop", 50.0, 0.05, 30);
        store.create_skill(&skill).unwrap();
        for i in 0..count {
            store.create_activity(&make_activity(&skill, 30, 3, i as i64)).unwrap();
        }
        let recent = store.recent_activities(TEST_USER, limit).unwrap();
        prop_assert_eq!(recent.len(), count.min(limit));
    }
}
