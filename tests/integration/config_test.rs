//! Config file persistence

use std::fs;

use tempfile::TempDir;

use playbar::config::{Config, ConfigError, SkipSpec};
use playbar::ControlSurface;

#[test]
fn save_then_load_preserves_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.player.tick_ms = 100;
    config.player.theme = "ocean".to_string();
    config.controls.skip = vec![SkipSpec::Seconds(-5.0), SkipSpec::Tag("15".to_string())];

    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn invalid_toml_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[player\ntick_ms = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn configured_skips_become_buttons() {
    let config: Config = toml::from_str(
        r#"
        [controls]
        skip = ["-30", 5, "later"]
        "#,
    )
    .unwrap();

    let surface = ControlSurface::from_config(&config.controls);
    let offsets: Vec<f64> = surface.skip_buttons.iter().map(|b| b.offset).collect();

    assert_eq!(offsets, vec![-30.0, 5.0, 0.0]);
}

#[test]
fn partial_slider_tables_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[controls.volume]\nvalue = 0.5\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.controls.volume.value, 0.5);
    assert_eq!(config.controls.volume.max, 1.0);
    assert_eq!(config.controls.playback_rate.min, 0.5);
}
