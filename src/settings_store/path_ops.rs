use toml::Value;

use super::SettingsError;

const WILDCARD: char = '*';

/// Checks if a settings path matches a subscription pattern
///
/// Patterns are dot-separated like paths. A segment of `*` matches any
/// segment, a segment ending in `*` matches by prefix, and a pattern that
/// is shorter than the path matches everything beneath it.
///
/// # Examples
/// * `"bgOpacity"` matches `"bgOpacity"`, `"bg*"` and `"*"`
/// * `"general.log_level"` matches `"general"` and `"general.*"`
/// * `"colour"` does not match `"colour.extra"`
pub(super) fn path_matches(path: &str, pattern: &str) -> bool {
    let path_parts: Vec<&str> = path.split('.').collect();
    let pattern_parts: Vec<&str> = pattern.split('.').collect();

    if pattern_parts.len() > path_parts.len() {
        return false;
    }

    path_parts
        .iter()
        .zip(pattern_parts.iter())
        .all(|(path_part, pattern_part)| segment_matches(path_part, pattern_part))
}

fn segment_matches(segment: &str, pattern: &str) -> bool {
    match pattern.strip_suffix(WILDCARD) {
        Some(prefix) => segment.starts_with(prefix),
        None => segment == pattern,
    }
}

/// Navigates through a TOML value structure following a dot-separated path
///
/// # Errors
/// * `SettingsError::InvalidPath` - If the path doesn't exist or is malformed
pub(super) fn navigate_path(value: &Value, path: &str) -> Result<Value, SettingsError> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = value;

    for (i, part) in parts.iter().enumerate() {
        let Value::Table(table) = current else {
            return Err(SettingsError::InvalidPath(format!(
                "Cannot navigate into {} at path '{}'",
                current.type_str(),
                parts[..i].join("."),
            )));
        };

        current = table.get(*part).ok_or_else(|| {
            SettingsError::InvalidPath(format!("Key '{part}' not found in '{path}'"))
        })?;
    }

    Ok(current.clone())
}

/// Replaces the value at an existing dot-separated path
///
/// Only existing keys can be replaced; settings have a fixed shape.
///
/// # Errors
/// * `SettingsError::InvalidPath` - If the path is empty or doesn't exist
pub(super) fn set_value_at_path(
    value: &mut Value,
    path: &str,
    new_value: Value,
) -> Result<(), SettingsError> {
    if path.is_empty() {
        return Err(SettingsError::InvalidPath("Empty path".to_string()));
    }

    let mut current = value;

    for part in path.split('.') {
        current = match current {
            Value::Table(table) => table.get_mut(part).ok_or_else(|| {
                SettingsError::InvalidPath(format!("Key '{part}' not found in '{path}'"))
            })?,
            _ => {
                return Err(SettingsError::InvalidPath(format!(
                    "'{path}' descends into a non-table value at '{part}'"
                )));
            }
        };
    }

    *current = new_value;
    Ok(())
}
