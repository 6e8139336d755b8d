use skillwise_core::errors::*;

#[test]
fn skill_not_found_carries_id() {
    let err = SkillwiseError::SkillNotFound {
        id: "abc-123".into(),
    };
    assert!(err.to_string().contains("abc-123"));
}

#[test]
fn invalid_input_carries_field_and_reason() {
    let err = SkillwiseError::invalid("difficulty", "must be between 1 and 5");
    let msg = err.to_string();
    assert!(msg.contains("difficulty"));
    assert!(msg.contains("between 1 and 5"));
}

#[test]
fn storage_error_converts_to_skillwise_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: SkillwiseError = storage_err.into();
    assert!(matches!(err, SkillwiseError::StorageError(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn migration_failure_carries_version() {
    let err = StorageError::MigrationFailed {
        version: 2,
        reason: "table exists".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('2'));
    assert!(msg.contains("table exists"));
}

#[test]
fn serde_error_converts_to_skillwise_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
    let err: SkillwiseError = json_err.into();
    assert!(matches!(err, SkillwiseError::SerializationError(_)));
}
