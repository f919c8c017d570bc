use super::*;

#[test]
fn default_config_is_valid_and_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("config.json");
    write_config(&path, &default_config()).expect("write config");
    let loaded = load_config(&path).expect("load config");
    assert_eq!(loaded, default_config());
}

#[test]
fn omitted_fields_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"schema_version": 1, "currency_symbol": "€"}"#).expect("write");
    let loaded = load_config(&path).expect("load config");
    assert_eq!(loaded.currency_symbol, "€");
    assert_eq!(loaded.code_max_length, 20);
    assert!(loaded.allow_deferred_validation);
}

#[test]
fn unknown_fields_are_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"schema_version": 1, "colour": "blue"}"#).expect("write");
    let err = load_config(&path).expect_err("unknown field should fail");
    assert!(format!("{err:#}").contains("unknown field"));
}

#[test]
fn rejects_unsupported_schema_version() {
    let config = WizardConfig {
        schema_version: 99,
        ..default_config()
    };
    let err = validate_config(&config).expect_err("schema mismatch");
    assert!(err.to_string().contains("schema_version 99"));
}

#[test]
fn rejects_inverted_code_lengths() {
    let config = WizardConfig {
        code_min_length: 12,
        code_max_length: 6,
        ..default_config()
    };
    assert!(validate_config(&config).is_err());
}

#[test]
fn stub_parses_back_into_defaults() {
    let parsed: WizardConfig = serde_json::from_str(&config_stub()).expect("parse stub");
    assert_eq!(parsed, default_config());
}

#[test]
fn explicit_missing_path_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("missing.json");
    assert!(load_config_or_default(Some(&missing)).is_err());
}
