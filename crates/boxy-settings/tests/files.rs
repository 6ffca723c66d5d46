//! File round trips for configuration and parameter files

use boxy_dielines::{BoxParameters, BoxStyle, PrismParameters};
use boxy_export::ExportFormat;
use boxy_settings::{
    load_parameters, parameters_to_string, save_parameters, Config, FileFormat, MeasurementSystem,
    SettingsError,
};
use tempfile::TempDir;

#[test]
fn test_config_round_trip_json_and_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::new();
    config.export.default_format = ExportFormat::Dxf;
    config.export.png_dpi = 300.0;
    config.display.measurement_system = MeasurementSystem::Imperial;

    for name in ["config.json", "nested/config.toml"] {
        let path = dir.path().join(name);
        config.save_to_file(&path).unwrap();
        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config, "round trip through {}", name);
    }
}

#[test]
fn test_invalid_config_is_not_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::new();
    config.export.svg_scale = 0.0;

    assert!(config.save_to_file(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_invalid_config_is_not_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "export": { "arc_tolerance": -1.0 } }"#).unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::InvalidSetting { .. })
    ));
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Config::load_or_default(Some(&path)),
        Err(SettingsError::IoError(_))
    ));
}

#[test]
fn test_parameters_round_trip() {
    let dir = TempDir::new().unwrap();
    for style in BoxStyle::ALL {
        let params = style.default_parameters();
        for ext in ["json", "toml"] {
            let path = dir.path().join(format!("{}.{}", style.file_prefix(), ext));
            save_parameters(&params, &path).unwrap();
            assert_eq!(load_parameters(&path, Some(style)).unwrap(), params);
            assert_eq!(load_parameters(&path, None).unwrap(), params);
        }
    }
}

#[test]
fn test_partial_toml_parameters() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prism.toml");
    std::fs::write(&path, "style = \"triangular-prism\"\nside = 90.0\nside_lock_count = 3\n")
        .unwrap();

    let expected = BoxParameters::TriangularPrism(PrismParameters {
        side: 90.0,
        side_lock_count: 3,
        ..Default::default()
    });
    assert_eq!(load_parameters(&path, None).unwrap(), expected);
}

#[test]
fn test_defaults_document_names_style() {
    let params = BoxStyle::LockingFoldingLid.default_parameters();
    let toml = parameters_to_string(&params, FileFormat::Toml).unwrap();
    assert!(toml.contains("style = \"locking-folding-lid\""));
    assert!(toml.contains("lock_count = 2"));

    let json = parameters_to_string(&params, FileFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["length"], 254.0);
}
