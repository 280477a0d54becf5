use std::io::Write;
use tempfile::{NamedTempFile, tempdir};
use tempo_units::RoundingMode;
use tempo_units::config::{Config, load_from_path, save_to_path};

#[test]
fn test_load_config_valid() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let config_content = r#"
        [convert]
        decimal_places = 4
        rounding = "half-away-from-zero"

        [format]
        decimal_places = 3
        locale = "de-DE"
        group_digits = true
    "#;
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let config = load_from_path(temp_file.path()).expect("Failed to load valid config");

    assert_eq!(config.convert.decimal_places, Some(4));
    assert_eq!(config.convert.rounding, RoundingMode::HalfAwayFromZero);
    assert_eq!(config.format.decimal_places, 3);
    assert_eq!(config.format.locale.as_deref(), Some("de-DE"));
    assert!(config.format.group_digits);
}

#[test]
fn test_load_config_empty_uses_defaults() {
    let temp_file = NamedTempFile::new().unwrap();
    let config = load_from_path(temp_file.path()).expect("Empty config should load");
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_config_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = load_from_path(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_config_rejects_negative_places() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[convert]\ndecimal_places = -1\n")
        .unwrap();

    let result = load_from_path(temp_file.path());
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("must not be negative")
    );
}

#[test]
fn test_load_config_rejects_unknown_rounding() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[convert]\nrounding = \"sideways\"\n")
        .unwrap();

    assert!(load_from_path(temp_file.path()).is_err());
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.convert.decimal_places = Some(2);
    config.convert.rounding = RoundingMode::Floor;
    config.format.locale = Some("fr-FR".to_string());
    save_to_path(&config, &path).unwrap();

    let loaded = load_from_path(&path).unwrap();
    assert_eq!(loaded, config);
}
