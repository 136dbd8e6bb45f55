use crate::{
    cli::{
        CliError, CommandResult,
        formatting::{format_toml_value, parse_toml_value},
    },
    config::Settings,
    settings_store::SettingsStore,
};

/// Prints the value at `path`.
///
/// # Errors
/// Returns `CliError::SettingsError` if the path does not exist.
pub fn get(store: &SettingsStore, path: &str) -> CommandResult {
    let value = store
        .get_by_path(path)
        .map_err(|e| CliError::SettingsError(e.to_string()))?;

    Ok(format!("{path}: {}", format_toml_value(&value)))
}

/// Sets the value at `path` and saves the settings file.
///
/// # Errors
/// Returns `CliError::SettingsError` if the path does not exist, the value
/// has the wrong type or range, or the file cannot be written.
pub fn set(store: &SettingsStore, path: &str, value: &str) -> CommandResult {
    store
        .set_by_path(path, parse_toml_value(value))
        .map_err(|e| CliError::SettingsError(e.to_string()))?;

    Ok(format!("Set new value '{value}' at path '{path}'"))
}

/// JSON schema of the settings file, pretty-printed.
///
/// # Errors
/// Returns `CliError::SettingsError` if the schema cannot be serialized.
pub fn schema() -> CommandResult {
    serde_json::to_string_pretty(&Settings::json_schema())
        .map_err(|e| CliError::SettingsError(e.to_string()))
}
