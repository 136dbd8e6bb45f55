use std::{fs, path::Path};

use tracing::{debug, info, instrument};

use super::Settings;
use crate::{ColoursError, Result};

const FILE_HEADER: &str = "# Colours new-tab settings\n\n";

impl Settings {
    /// Loads settings from a TOML file, creating it with defaults if missing.
    ///
    /// Keys absent from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or read
    /// - The TOML content is invalid or contains a malformed colour
    /// - A value is out of range (see [`Settings::validate`])
    #[instrument]
    pub fn load(path: &Path) -> Result<Settings> {
        if !path.exists() {
            info!("No settings file found, writing defaults");
            Settings::default().save(path)?;
        }

        let content = fs::read_to_string(path).map_err(|e| ColoursError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let settings = Self::from_toml(&content).map_err(|e| match e {
            ColoursError::TomlParseError { details, .. } => {
                ColoursError::toml_parse(details, Some(path))
            }
            other => other,
        })?;

        debug!(colour = %settings.colour, bg = %settings.bg, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    /// Returns `ColoursError::TomlParseError` on invalid TOML and
    /// `ColoursError::ConfigValidation` on out-of-range values.
    pub fn from_toml(content: &str) -> Result<Settings> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| ColoursError::toml_parse(e, None))?;
        settings.validate()?;

        Ok(settings)
    }

    /// Writes settings to `path` atomically through a temporary file.
    ///
    /// # Errors
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let body = toml::to_string_pretty(self).map_err(|e| ColoursError::Serialization {
            details: e.to_string(),
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ColoursError::IoError {
                path: parent.to_path_buf(),
                details: format!("Failed to create settings directory: {e}"),
            })?;
        }

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, format!("{FILE_HEADER}{body}")).map_err(|e| {
            ColoursError::IoError {
                path: temp_path.clone(),
                details: e.to_string(),
            }
        })?;

        fs::rename(&temp_path, path).map_err(|e| ColoursError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}
