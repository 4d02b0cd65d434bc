use scalekit_overlay::LengthAxis;
use scalekit_settings::{Config, SettingsError, SettingsPersistence};
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let persistence = SettingsPersistence::load_or_default(&path).unwrap();

    assert_eq!(persistence.config(), &Config::default());
    assert!(!path.exists());
}

#[test]
fn test_save_creates_directory_and_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("scalekit").join("config.toml");

    let mut persistence = SettingsPersistence::new(&path);
    persistence.config_mut().overlay.length_axis = LengthAxis::ColumnSpacing;
    persistence.config_mut().style.color = "#00ff00".to_string();
    persistence.save().unwrap();

    let reloaded = SettingsPersistence::load_or_default(&path).unwrap();
    assert_eq!(reloaded.config(), persistence.config());
}

#[test]
fn test_json_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("overlay.json");

    let mut config = Config::default();
    config.overlay.enabled_on_startup = true;
    config.style.line_dash = Some(vec![6.0, 3.0]);
    config.save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"enabled_on_startup\": true"));
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[style]\nline_width = -3.0\n").unwrap();

    let err = SettingsPersistence::load_or_default(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_malformed_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[overlay\nminor_tick_length = ").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::TomlError(_)));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");

    let err = Config::default().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
    assert!(!path.exists());
}

#[test]
fn test_init_does_not_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    assert!(SettingsPersistence::init(&path, false).unwrap());

    let mut persistence = SettingsPersistence::load_or_default(&path).unwrap();
    persistence.config_mut().style.color = "red".to_string();
    persistence.save().unwrap();

    assert!(!SettingsPersistence::init(&path, false).unwrap());
    let kept = Config::load_from_file(&path).unwrap();
    assert_eq!(kept.style.color, "red");

    assert!(SettingsPersistence::init(&path, true).unwrap());
    assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
}
