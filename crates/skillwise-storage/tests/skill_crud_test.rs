use chrono::{Duration, Utc};
use skillwise_core::errors::SkillwiseError;
use skillwise_core::skill::{Activity, ActivityKind, Score, Skill, SkillSnapshot};
use skillwise_core::traits::ISkillStorage;
use skillwise_storage::StorageEngine;
use test_fixtures::*;

fn engine() -> StorageEngine {
    StorageEngine::open_in_memory().unwrap()
}

// ── Skills ──────────────────────────────────────────────────────────────

#[test]
fn create_then_get_roundtrips_all_fields() {
    let store = engine();
    let skill = make_skill("Rust", 72.5, 0.05, 3);
    store.create_skill(&skill).unwrap();

    let loaded = store.get_skill(TEST_USER, &skill.id).unwrap().unwrap();
    assert_eq!(loaded, skill);
}

#[test]
fn wall_clock_timestamps_roundtrip_exactly() {
    let store = engine();
    let skill = Skill::new(TEST_USER, "Rust", "Programming Language", 70, 0.05, Utc::now());
    store.create_skill(&skill).unwrap();
    assert_eq!(store.get_skill(TEST_USER, &skill.id).unwrap().unwrap(), skill);

    let activity = Activity::new(
        TEST_USER,
        skill.id.clone(),
        ActivityKind::Reading,
        20,
        2,
        None,
        Utc::now(),
    );
    store.create_activity(&activity).unwrap();
    assert_eq!(store.recent_activities(TEST_USER, 1).unwrap(), vec![activity]);
}

#[test]
fn get_missing_skill_is_none() {
    let store = engine();
    assert!(store.get_skill(TEST_USER, "nope").unwrap().is_none());
}

#[test]
fn other_users_cannot_see_skill() {
    let store = engine();
    let skill = make_skill("Rust", 80.0, 0.05, 0);
    store.create_skill(&skill).unwrap();

    assert!(store.get_skill(OTHER_USER, &skill.id).unwrap().is_none());
    assert!(store.list_skills(OTHER_USER).unwrap().is_empty());
    assert!(!store.delete_skill(OTHER_USER, &skill.id).unwrap());
    assert!(store.get_skill(TEST_USER, &skill.id).unwrap().is_some());
}

#[test]
fn list_skills_newest_first() {
    let store = engine();
    let old = make_skill("Old", 50.0, 0.05, 10);
    let mid = make_skill("Mid", 50.0, 0.05, 5);
    let new = make_skill("New", 50.0, 0.05, 0);
    for s in [&mid, &old, &new] {
        store.create_skill(s).unwrap();
    }

    let names: Vec<String> = store
        .list_skills(TEST_USER)
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["New", "Mid", "Old"]);
}

#[test]
fn update_skill_persists_score_and_clock() {
    let store = engine();
    let mut skill = make_skill("SQL", 60.0, 0.05, 7);
    store.create_skill(&skill).unwrap();

    skill.current_score = Score::new(74.0);
    skill.last_practiced_at = fixed_now();
    skill.updated_at = fixed_now();
    store.update_skill(&skill).unwrap();

    let loaded = store.get_skill(TEST_USER, &skill.id).unwrap().unwrap();
    assert_eq!(loaded.current_score.value(), 74.0);
    assert_eq!(loaded.last_practiced_at, fixed_now());
}

#[test]
fn update_missing_skill_is_not_found() {
    let store = engine();
    let skill = make_skill("Ghost", 60.0, 0.05, 0);
    let err = store.update_skill(&skill).unwrap_err();
    assert!(matches!(err, SkillwiseError::SkillNotFound { .. }));
}

#[test]
fn duplicate_id_is_rejected() {
    let store = engine();
    let skill = make_skill("Rust", 60.0, 0.05, 0);
    store.create_skill(&skill).unwrap();
    assert!(store.create_skill(&skill).is_err());
}

// ── Activities ──────────────────────────────────────────────────────────

#[test]
fn recent_activities_newest_first_with_limit() {
    let store = engine();
    let skill = make_skill("Go", 60.0, 0.05, 30);
    store.create_skill(&skill).unwrap();
    for days_ago in [9, 1, 5, 3] {
        store
            .create_activity(&make_activity(&skill, 30, 3, days_ago))
            .unwrap();
    }

    let recent = store.recent_activities(TEST_USER, 3).unwrap();
    assert_eq!(recent.len(), 3);
    let expected: Vec<_> = [1, 3, 5]
        .iter()
        .map(|d| fixed_now() - Duration::days(*d))
        .collect();
    let got: Vec<_> = recent.iter().map(|a| a.practiced_at).collect();
    assert_eq!(got, expected);
}

#[test]
fn activity_roundtrips_notes_and_kind() {
    let store = engine();
    let skill = make_skill("Go", 60.0, 0.05, 0);
    store.create_skill(&skill).unwrap();
    let mut activity = make_activity(&skill, 45, 4, 0);
    activity.notes = Some("channels and select".into());
    store.create_activity(&activity).unwrap();

    let loaded = store.activities_for_skill(TEST_USER, &skill.id).unwrap();
    assert_eq!(loaded, vec![activity]);
}

#[test]
fn activity_for_unknown_skill_is_rejected() {
    let store = engine();
    let skill = make_skill("Never stored", 60.0, 0.05, 0);
    let activity = make_activity(&skill, 30, 2, 0);
    assert!(store.create_activity(&activity).is_err());
}

#[test]
fn record_activity_updates_skill_atomically() {
    let store = engine();
    let skill = make_skill("Python", 40.0, 0.05, 10);
    store.create_skill(&skill).unwrap();

    let activity = make_activity(&skill, 60, 3, 0);
    let written = store
        .record_activity(&activity, &mut |current: &Skill| {
            let mut next = current.clone();
            next.current_score = Score::new(48.4);
            next.last_practiced_at = activity.practiced_at;
            next
        })
        .unwrap();

    let loaded = store.get_skill(TEST_USER, &skill.id).unwrap().unwrap();
    assert_eq!(loaded, written);
    assert_eq!(loaded.current_score.value(), 48.4);
    assert_eq!(store.activities_for_skill(TEST_USER, &skill.id).unwrap().len(), 1);
}

#[test]
fn record_activity_checkpoints_from_stored_row() {
    let store = engine();
    let skill = make_skill("Go", 50.0, 0.05, 0);
    store.create_skill(&skill).unwrap();

    // The caller's copy is stale; the closure must see the latest write.
    for expected in [60.0, 70.0] {
        let activity = make_activity(&skill, 30, 2, 0);
        let written = store
            .record_activity(&activity, &mut |current: &Skill| {
                let mut next = current.clone();
                next.current_score = current.current_score + 10.0;
                next
            })
            .unwrap();
        assert_eq!(written.current_score.value(), expected);
    }
    assert_eq!(store.activities_for_skill(TEST_USER, &skill.id).unwrap().len(), 2);
}

#[test]
fn record_activity_for_another_users_skill_writes_nothing() {
    let store = engine();
    let stored = make_skill("Python", 40.0, 0.05, 10);
    store.create_skill(&stored).unwrap();

    let mut foreign_activity = make_activity(&stored, 60, 3, 0);
    foreign_activity.user_id = OTHER_USER.into();
    let mut called = false;

    let err = store
        .record_activity(&foreign_activity, &mut |current: &Skill| {
            called = true;
            current.clone()
        })
        .unwrap_err();
    assert!(matches!(err, SkillwiseError::SkillNotFound { .. }));
    assert!(!called);
    assert!(store.recent_activities(OTHER_USER, 10).unwrap().is_empty());
    let unchanged = store.get_skill(TEST_USER, &stored.id).unwrap().unwrap();
    assert_eq!(unchanged.current_score.value(), 40.0);
}

#[test]
fn record_activity_rolls_back_when_checkpoint_changes_owner() {
    let store = engine();
    let skill = make_skill("A", 40.0, 0.05, 0);
    store.create_skill(&skill).unwrap();
    let activity = make_activity(&skill, 30, 2, 0);

    let err = store
        .record_activity(&activity, &mut |current: &Skill| {
            let mut next = current.clone();
            next.user_id = OTHER_USER.into();
            next.current_score = Score::MAX;
            next
        })
        .unwrap_err();
    assert!(matches!(err, SkillwiseError::InvalidInput { .. }));
    assert!(store.recent_activities(TEST_USER, 10).unwrap().is_empty());
    let unchanged = store.get_skill(TEST_USER, &skill.id).unwrap().unwrap();
    assert_eq!(unchanged.current_score.value(), 40.0);
}

// ── Snapshots & cascade ─────────────────────────────────────────────────

#[test]
fn snapshots_oldest_first() {
    let store = engine();
    let skill = make_skill("Docker", 90.0, 0.05, 0);
    store.create_skill(&skill).unwrap();

    let later = SkillSnapshot::new(&skill.id, Score::new(70.0), fixed_now());
    let earlier = SkillSnapshot::new(&skill.id, Score::new(90.0), fixed_now() - Duration::days(4));
    store.record_snapshot(&later).unwrap();
    store.record_snapshot(&earlier).unwrap();

    let history = store.snapshots_for_skill(TEST_USER, &skill.id).unwrap();
    assert_eq!(history, vec![earlier, later]);
}

#[test]
fn snapshots_are_scoped_to_owner() {
    let store = engine();
    let skill = make_skill("Docker", 90.0, 0.05, 0);
    store.create_skill(&skill).unwrap();
    store
        .record_snapshot(&SkillSnapshot::new(&skill.id, Score::new(90.0), fixed_now()))
        .unwrap();

    assert!(store.snapshots_for_skill(OTHER_USER, &skill.id).unwrap().is_empty());
    assert_eq!(store.snapshots_for_skill(TEST_USER, &skill.id).unwrap().len(), 1);
}

#[test]
fn delete_skill_cascades_to_activities_and_snapshots() {
    let store = engine();
    let skill = make_skill("Kubernetes", 55.0, 0.05, 2);
    store.create_skill(&skill).unwrap();
    store.create_activity(&make_activity(&skill, 30, 3, 1)).unwrap();
    store
        .record_snapshot(&SkillSnapshot::new(&skill.id, Score::new(55.0), fixed_now()))
        .unwrap();

    assert!(store.delete_skill(TEST_USER, &skill.id).unwrap());
    assert!(store.get_skill(TEST_USER, &skill.id).unwrap().is_none());
    assert!(store.recent_activities(TEST_USER, 50).unwrap().is_empty());
    assert!(store.snapshots_for_skill(TEST_USER, &skill.id).unwrap().is_empty());
}

#[test]
fn delete_missing_skill_reports_false() {
    let store = engine();
    assert!(!store.delete_skill(TEST_USER, "missing").unwrap());
}
