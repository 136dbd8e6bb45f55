//! Unit tests for settings_store module
//!
//! In-memory stores unless a test needs a backing file.

#![allow(clippy::panic)]

use std::time::Duration;

use futures::StreamExt;
use toml::Value;

use crate::{
    config::{ColourMode, Settings},
    settings_store::{
        SettingsChange, SettingsError, SettingsStore,
        path_ops::{navigate_path, path_matches, set_value_at_path},
    },
};

#[test]
fn path_matching() {
    assert!(path_matches("colour", "colour"));
    assert!(path_matches("colour", "*"));
    assert!(path_matches("bgOpacity", "bg*"));
    assert!(path_matches("general.log_level", "general"));
    assert!(path_matches("general.log_level", "general.*"));
    assert!(path_matches("general.log_level", "*.log_level"));

    assert!(!path_matches("colourSolid", "colour"));
    assert!(!path_matches("colour", "colour.extra"));
    assert!(!path_matches("font", "bg*"));
}

#[test]
fn navigate_and_set_paths() {
    let mut value: Value = toml::from_str("a = 1\n[b]\nc = \"x\"\n").unwrap();

    assert_eq!(navigate_path(&value, "a").unwrap(), Value::Integer(1));
    assert_eq!(
        navigate_path(&value, "b.c").unwrap(),
        Value::String("x".to_string())
    );
    assert!(matches!(
        navigate_path(&value, "b.missing"),
        Err(SettingsError::InvalidPath(_))
    ));
    assert!(navigate_path(&value, "a.deeper").is_err());

    set_value_at_path(&mut value, "b.c", Value::String("y".to_string())).unwrap();
    assert_eq!(
        navigate_path(&value, "b.c").unwrap(),
        Value::String("y".to_string())
    );

    assert!(set_value_at_path(&mut value, "b.new", Value::Boolean(true)).is_err());
    assert!(set_value_at_path(&mut value, "", Value::Boolean(true)).is_err());
}

#[test]
fn settings_change_extract() {
    let change = SettingsChange::new(
        "colour".to_string(),
        Some(Value::String("regular".to_string())),
        Value::String("hue".to_string()),
    );

    assert_eq!(change.extract::<ColourMode>().unwrap(), ColourMode::Hue);
    assert_eq!(change.as_string().as_deref(), Some("hue"));
    assert!(matches!(
        change.extract::<bool>(),
        Err(SettingsError::TypeMismatch { .. })
    ));
}

#[tokio::test]
async fn store_with_defaults() {
    let store = SettingsStore::with_defaults();

    assert_eq!(store.get_settings(), Settings::default());
    assert!(store.file().is_none());
    assert_eq!(
        store.get_by_path("colour").unwrap(),
        Value::String("regular".to_string())
    );
}

#[tokio::test]
async fn set_by_path_updates_and_notifies() {
    let store = SettingsStore::with_defaults();
    let mut sub = store.subscribe("colour").await.unwrap();

    store
        .set_by_path("colour", Value::String("full".to_string()))
        .unwrap();

    assert_eq!(store.get_settings().colour, ColourMode::Full);

    let change = tokio::time::timeout(Duration::from_secs(1), sub.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(change.path, "colour");
    assert_eq!(change.old_value, Some(Value::String("regular".to_string())));
    assert_eq!(change.new_value, Value::String("full".to_string()));
}

#[tokio::test]
async fn subscriptions_are_filtered_by_pattern() {
    let store = SettingsStore::with_defaults();
    let mut bg_sub = store.subscribe("bg*").await.unwrap();
    let mut all_sub = store.subscribe("*").await.unwrap();

    store.set_by_path("showDate", Value::Boolean(true)).unwrap();
    store.set_by_path("bgOpacity", Value::Integer(30)).unwrap();

    let first = tokio::time::timeout(Duration::from_secs(1), all_sub.recv())
        .await
        .unwrap()
        .unwrap();
    let second = tokio::time::timeout(Duration::from_secs(1), all_sub.recv())
        .await
        .unwrap()
        .unwrap();
    let mut all_paths = vec![first.path, second.path];
    all_paths.sort();
    assert_eq!(all_paths, vec!["bgOpacity", "showDate"]);

    let bg_change = tokio::time::timeout(Duration::from_secs(1), bg_sub.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bg_change.path, "bgOpacity");
    assert!(bg_sub.try_recv().is_none());
}

#[tokio::test]
async fn set_by_path_rejects_bad_values() {
    let store = SettingsStore::with_defaults();

    assert!(matches!(
        store.set_by_path("doesNotExist", Value::Boolean(true)),
        Err(SettingsError::InvalidPath(_))
    ));
    assert!(matches!(
        store.set_by_path("colour", Value::String("rainbow".to_string())),
        Err(SettingsError::ConversionError { .. })
    ));
    assert!(matches!(
        store.set_by_path("colourSolid", Value::String("#12".to_string())),
        Err(SettingsError::ConversionError { .. })
    ));
    assert!(matches!(
        store.set_by_path("bgOpacity", Value::Integer(101)),
        Err(SettingsError::Validation { .. })
    ));

    assert_eq!(store.get_settings(), Settings::default());
}

#[tokio::test]
async fn replace_reports_changed_fields() {
    let store = SettingsStore::with_defaults();

    let unchanged = store.replace(Settings::default()).unwrap();
    assert!(unchanged.is_empty());

    let mut new_settings = Settings::default();
    new_settings.colour = ColourMode::Solid;
    new_settings.ticker = true;

    let changes = store.replace(new_settings.clone()).unwrap();
    let paths: Vec<&str> = changes.iter().map(|c| c.path.as_str()).collect();

    assert_eq!(paths, vec!["colour", "ticker"]);
    assert_eq!(store.get_settings(), new_settings);
}

#[tokio::test]
async fn watch_settings_yields_snapshots() {
    let store = SettingsStore::with_defaults();
    let mut stream = store.watch_settings("*").await.unwrap();

    store.set_by_path("ticker", Value::Boolean(true)).unwrap();

    let settings = tokio::time::timeout(Duration::from_secs(1), stream.next())
        .await
        .unwrap()
        .unwrap();
    assert!(settings.ticker);
}

#[tokio::test]
async fn file_backed_store_persists_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let store = SettingsStore::load_from(&path).unwrap();
    store
        .set_by_path("colourSolid", Value::String("#abcdef".to_string()))
        .unwrap();

    let reloaded = Settings::load(&path).unwrap();
    assert_eq!(reloaded.colour_solid.to_string(), "#abcdef");
}

#[tokio::test]
async fn reload_keeps_settings_on_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let store = SettingsStore::load_from(&path).unwrap();
    std::fs::write(&path, "colour = \"hue\"\n").unwrap();
    let changes = store.reload_from_file().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(store.get_settings().colour, ColourMode::Hue);

    std::fs::write(&path, "colour = ").unwrap();
    assert!(matches!(
        store.reload_from_file(),
        Err(SettingsError::SettingsUnavailable { .. })
    ));
    assert_eq!(store.get_settings().colour, ColourMode::Hue);
}

#[tokio::test]
async fn reload_without_file_is_unavailable() {
    let store = SettingsStore::with_defaults();
    assert!(matches!(
        store.reload_from_file(),
        Err(SettingsError::SettingsUnavailable { .. })
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writes_to_different_fields_all_land() {
    const FIELDS: [&str; 10] = [
        "animations",
        "time24hr",
        "showTime",
        "showTimeSec",
        "showDate",
        "showColour",
        "ticker",
        "shortcutOpts",
        "shortcutNewTab",
        "shortcutImage",
    ];

    for _ in 0..20 {
        let store = SettingsStore::with_defaults();
        let before: Vec<bool> = FIELDS
            .iter()
            .map(|field| store.get_by_path(field).unwrap().as_bool().unwrap())
            .collect();

        let writers: Vec<_> = FIELDS
            .iter()
            .zip(&before)
            .map(|(&field, &old)| {
                let store = store.clone();
                let flipped = Value::Boolean(!old);
                tokio::task::spawn_blocking(move || store.set_by_path(field, flipped))
            })
            .collect();

        for writer in writers {
            writer.await.unwrap().unwrap();
        }

        for (field, old) in FIELDS.iter().zip(&before) {
            assert_eq!(
                store.get_by_path(field).unwrap(),
                Value::Boolean(!old),
                "{field} was lost"
            );
        }
    }
}
