// Designer config persistence tests
// Covers JSON/TOML round trips, partial files and format detection.

use pitlane_settings::{DesignerConfig, HexColor, SettingsError};
use tempfile::TempDir;

#[test]
fn test_toml_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("designer.toml");

    let mut config = DesignerConfig::default();
    config.canvas.width = 1024;
    config.stroke.color = HexColor::new(0xff, 0x00, 0x00);
    config.save_to_file(&path).unwrap();

    let loaded = DesignerConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("color = \"#ff0000\""));
}

#[test]
fn test_json_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("designer.json");

    let config = DesignerConfig::default();
    config.save_to_file(&path).unwrap();
    assert_eq!(DesignerConfig::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("designer.toml");
    std::fs::write(&path, "[stroke]\ndefault_width = 35\n").unwrap();

    let loaded = DesignerConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.stroke.default_width, 35);
    assert_eq!(loaded.stroke.min_width, 10);
    assert_eq!(loaded.canvas.width, 800);
    assert_eq!(loaded.grid.color.to_string(), "#374151");
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("designer.toml");
    std::fs::write(&path, "[grid]\nopacity = 3.0\n").unwrap();

    let err = DesignerConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));

    std::fs::write(&path, "[stroke]\ncolor = \"green\"\n").unwrap();
    assert!(matches!(
        DesignerConfig::load_from_file(&path).unwrap_err(),
        SettingsError::TomlError(_)
    ));
}

#[test]
fn test_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("designer.yaml");
    let err = DesignerConfig::default().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(ext) if ext == "yaml"));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");
    assert_eq!(
        DesignerConfig::load_or_default(&path).unwrap(),
        DesignerConfig::default()
    );
}
