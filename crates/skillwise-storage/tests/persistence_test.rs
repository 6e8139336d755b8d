//! File-backed persistence: reopen, migrations, pragmas.

use skillwise_core::config::StorageConfig;
use skillwise_core::traits::ISkillStorage;
use skillwise_storage::{migrations, pragmas, StorageEngine};
use test_fixtures::*;

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skills.db");
    let skill = make_skill("Rust", 81.0, 0.04, 2);

    {
        let store = StorageEngine::open(&path).unwrap();
        store.create_skill(&skill).unwrap();
        store.create_activity(&make_activity(&skill, 50, 4, 1)).unwrap();
    }

    let store = StorageEngine::open(&path).unwrap();
    assert_eq!(store.get_skill(TEST_USER, &skill.id).unwrap().unwrap(), skill);
    assert_eq!(store.recent_activities(TEST_USER, 10).unwrap().len(), 1);
}

#[test]
fn migrations_run_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skills.db");

    let store = StorageEngine::open(&path).unwrap();
    assert_eq!(store.schema_version().unwrap(), migrations::LATEST_VERSION);
    drop(store);

    let store = StorageEngine::open(&path).unwrap();
    let rerun = store
        .connection()
        .with_conn(migrations::run_migrations)
        .unwrap();
    assert_eq!(rerun, 0);
    assert_eq!(store.schema_version().unwrap(), migrations::LATEST_VERSION);
}

#[test]
fn file_backed_store_uses_wal_and_foreign_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = StorageEngine::open(&dir.path().join("skills.db")).unwrap();
    store
        .connection()
        .with_conn(|conn| {
            assert!(pragmas::verify_wal_mode(conn)?);
            assert!(pragmas::foreign_keys_enabled(conn)?);
            Ok(())
        })
        .unwrap();
}

#[test]
fn opens_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        db_path: dir.path().join("configured.db").to_string_lossy().into_owned(),
        busy_timeout_ms: 1_000,
    };
    let store = StorageEngine::from_config(&config).unwrap();
    assert!(store.list_skills(TEST_USER).unwrap().is_empty());
    assert!(dir.path().join("configured.db").exists());
}

#[test]
fn in_memory_store_is_migrated() {
    let store = StorageEngine::open_in_memory().unwrap();
    assert_eq!(store.schema_version().unwrap(), migrations::LATEST_VERSION);
}
