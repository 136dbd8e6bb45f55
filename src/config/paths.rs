use std::{
    env, fs,
    io::{Error, ErrorKind},
    path::PathBuf,
};

const APP_NAME: &str = "colours";

/// Locations of the settings file and application data.
///
/// Follows the XDG Base Directory specification for configuration.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory
    ///
    /// `$XDG_CONFIG_HOME/colours`, falling back to `$HOME/.config/colours`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join(APP_NAME))
    }

    /// Returns `$HOME/.colours`, creating it if needed
    ///
    /// # Errors
    /// Returns an error if HOME is not set or the directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        let home = env::var("HOME")
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        let app_dir = PathBuf::from(home).join(format!(".{APP_NAME}"));
        fs::create_dir_all(&app_dir)?;

        Ok(app_dir)
    }

    /// Returns the log directory, creating it if needed
    ///
    /// # Errors
    /// Returns error if directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::app_data_dir()?.join("logs");
        fs::create_dir_all(&log_dir)?;

        Ok(log_dir)
    }

    /// Returns the path of the settings file
    ///
    /// # Errors
    /// Returns an error if the configuration directory cannot be determined
    pub fn settings_file() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("settings.toml"))
    }
}
