//! Unit tests for config module
//!
//! Tests settings defaults, serialization and validation.
//! Filesystem access only through temporary directories.

#![allow(clippy::panic)]

use crate::{
    ColoursError,
    colour::{ColourFormat, HexColour},
    config::{BackgroundMode, ColourMode, FontMode, LogLevel, Settings, UnsplashFrequency},
};

#[test]
fn settings_default_is_valid() {
    let settings = Settings::default();

    assert!(settings.validate().is_ok());
    assert_eq!(settings.colour, ColourMode::Regular);
    assert_eq!(settings.bg, BackgroundMode::None);
    assert!(!settings.needs_full_protection());
}

#[test]
fn settings_empty_toml_uses_defaults() {
    let settings = Settings::from_toml("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn settings_use_extension_key_names() {
    let toml_str = r##"
        colour = "solid"
        colourSolid = "#112233"
        colourFormat = "rgb"
        bg = "unsplash"
        bgUnsplashFreq = "perSession"
        bgOpacity = 40
        font = "web"
        fontWeb = "Roboto Mono"
        time24hr = true
        showTimeSec = false
        shortcutNewTab = true

        [general]
        log_level = "debug"
    "##;

    let settings = Settings::from_toml(toml_str).unwrap();

    assert_eq!(settings.colour, ColourMode::Solid);
    assert_eq!(settings.colour_solid, "#112233".parse::<HexColour>().unwrap());
    assert_eq!(settings.colour_format, ColourFormat::Rgb);
    assert_eq!(settings.bg, BackgroundMode::Unsplash);
    assert_eq!(settings.bg_unsplash_freq, UnsplashFrequency::PerSession);
    assert_eq!(settings.bg_opacity, 40);
    assert_eq!(settings.font, FontMode::Web);
    assert_eq!(settings.font_web, "Roboto Mono");
    assert!(settings.time_24hr);
    assert!(!settings.show_time_sec);
    assert!(settings.shortcut_new_tab);
    assert_eq!(settings.general.log_level, LogLevel::Debug);
}

#[test]
fn settings_serialize_roundtrip() {
    let original = Settings {
        colour: ColourMode::Hue,
        bg_custom_url: "https://example.com/a.jpg".to_string(),
        ..Settings::default()
    };

    let toml_str = toml::to_string(&original).unwrap();
    assert!(toml_str.contains("colour = \"hue\""));
    assert!(toml_str.contains("bgCustomUrl"));
    assert!(toml_str.contains("time24hr"));

    let parsed = Settings::from_toml(&toml_str).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn settings_reject_malformed_solid_colour() {
    let result = Settings::from_toml(r##"colourSolid = "#12345g""##);
    assert!(matches!(result, Err(ColoursError::TomlParseError { .. })));
}

#[test]
fn settings_reject_unknown_mode() {
    assert!(Settings::from_toml(r#"colour = "rainbow""#).is_err());
}

#[test]
fn settings_reject_opacity_over_hundred() {
    let result = Settings::from_toml("bgOpacity = 150");
    assert!(matches!(result, Err(ColoursError::ConfigValidation { .. })));
}

#[test]
fn opacity_fraction() {
    let mut settings = Settings::default();

    settings.bg_opacity = 0;
    assert_eq!(settings.bg_opacity_fraction(), 0.0);

    settings.bg_opacity = 50;
    assert_eq!(settings.bg_opacity_fraction(), 0.5);

    settings.bg_opacity = 100;
    assert_eq!(settings.bg_opacity_fraction(), 1.0);
}

#[test]
fn full_protection_rules() {
    let mut settings = Settings::default();
    assert!(!settings.needs_full_protection());

    settings.colour = ColourMode::Full;
    assert!(settings.needs_full_protection());

    settings.colour = ColourMode::Regular;
    settings.bg = BackgroundMode::Custom;
    assert!(settings.needs_full_protection());
}

#[test]
fn load_creates_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let settings = Settings::load(&path).unwrap();

    assert_eq!(settings, Settings::default());
    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let settings = Settings {
        colour: ColourMode::Full,
        show_date: true,
        ..Settings::default()
    };
    settings.save(&path).unwrap();

    assert_eq!(Settings::load(&path).unwrap(), settings);
}

#[test]
fn load_reports_file_location_on_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "colour = [").unwrap();

    match Settings::load(&path) {
        Err(ColoursError::TomlParseError { location, .. }) => {
            assert!(location.ends_with("settings.toml"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn json_schema_lists_settings() {
    let schema = Settings::json_schema();
    let properties = schema.get("properties").unwrap();

    assert!(properties.get("colourSolid").is_some());
    assert!(properties.get("bgOpacity").is_some());
    assert!(properties.get("time24hr").is_some());
}
