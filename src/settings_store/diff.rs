use std::{collections::BTreeSet, time::Instant};

use toml::Value;

use crate::config::Settings;

use super::{SettingsChange, SettingsError};

/// Compares two settings values field by field.
///
/// Both sides are fully populated (every field has a default), so a key
/// present on one side is always present on the other.
///
/// # Errors
/// Returns `SettingsError::SerializationError` if either side cannot be
/// converted to TOML.
pub(super) fn diff_settings(
    old: &Settings,
    new: &Settings,
) -> Result<Vec<SettingsChange>, SettingsError> {
    let old_value = to_value(old)?;
    let new_value = to_value(new)?;

    let mut changes = Vec::new();
    diff_values("", &old_value, &new_value, Instant::now(), &mut changes);

    Ok(changes)
}

pub(super) fn to_value(settings: &Settings) -> Result<Value, SettingsError> {
    Value::try_from(settings).map_err(|e| SettingsError::SerializationError {
        content_type: "settings".to_string(),
        details: e.to_string(),
    })
}

fn diff_values(
    path: &str,
    old: &Value,
    new: &Value,
    timestamp: Instant,
    changes: &mut Vec<SettingsChange>,
) {
    match (old, new) {
        (Value::Table(old_table), Value::Table(new_table)) => {
            let keys: BTreeSet<&String> = old_table.keys().chain(new_table.keys()).collect();

            for key in keys {
                let field_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };

                match (old_table.get(key), new_table.get(key)) {
                    (Some(old_val), Some(new_val)) => {
                        diff_values(&field_path, old_val, new_val, timestamp, changes);
                    }
                    (old_val, Some(new_val)) => changes.push(SettingsChange {
                        path: field_path,
                        old_value: old_val.cloned(),
                        new_value: new_val.clone(),
                        timestamp,
                    }),
                    (Some(_), None) | (None, None) => {}
                }
            }
        }
        _ if old != new => changes.push(SettingsChange {
            path: path.to_string(),
            old_value: Some(old.clone()),
            new_value: new.clone(),
            timestamp,
        }),
        _ => {}
    }
}
