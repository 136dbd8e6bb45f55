//! Command-line interface.
//!
//! `run` shows the live page in the terminal, `colour` prints the colour for
//! a given time and `config` reads and writes the settings file.

pub mod commands;
pub mod formatting;
pub mod terminal;
mod types;

#[cfg(test)]
mod tests;

use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};

pub use types::{CliError, CommandResult};

use crate::{
    colour::HexColour,
    config::{ColourMode, ConfigPaths, LogLevel, Settings},
    newtab::NewTab,
    settings_store::{SettingsError, SettingsStore},
};

/// Time-of-day colours in the terminal.
#[derive(Debug, Parser)]
#[command(name = "colours", version, about)]
pub struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Log level, overriding the settings file
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// What to do
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the live clock and colour until Ctrl-C
    Run {
        /// Skip background images and web fonts
        #[arg(long)]
        offline: bool,
    },

    /// Print the colour for a time of day
    Colour {
        /// Time as HH:MM:SS or HH:MM
        time: String,

        /// Colour mode
        #[arg(short, long, default_value = "regular", value_parser = parse_colour_mode)]
        mode: ColourMode,

        /// Colour used in solid mode
        #[arg(long, default_value = "#000000")]
        solid: HexColour,

        /// Print only the hex colour
        #[arg(long)]
        plain: bool,
    },

    /// Read and write settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Settings subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print a setting, e.g. `colour` or `general.log_level`
    Get {
        /// Dot-separated setting path
        path: String,
    },

    /// Change a setting and save the file
    Set {
        /// Dot-separated setting path
        path: String,
        /// New value
        value: String,
    },

    /// Print the JSON schema of the settings file
    Schema,

    /// Print the location of the settings file
    Path,
}

fn parse_colour_mode(value: &str) -> Result<ColourMode, String> {
    toml::Value::String(value.to_string())
        .try_into()
        .map_err(|_| format!("'{value}' is not one of solid, full, hue, random, regular"))
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    toml::Value::String(value.to_lowercase())
        .try_into()
        .map_err(|_| format!("'{value}' is not one of error, warn, info, debug, trace"))
}

impl Cli {
    /// Whether the command takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, Commands::Run { .. })
    }

    /// Settings file named on the command line, or the default one.
    ///
    /// # Errors
    /// Returns `CliError::IoError` if the configuration directory is unknown.
    pub fn settings_path(&self) -> Result<PathBuf, CliError> {
        match &self.settings {
            Some(path) => Ok(path.clone()),
            None => Ok(ConfigPaths::settings_file()?),
        }
    }

    /// Log level to run with.
    ///
    /// The command line wins. Otherwise the live page uses the level from the
    /// settings file and one-off commands only report warnings.
    pub fn log_level(&self) -> LogLevel {
        if let Some(level) = self.log_level {
            return level;
        }

        if !self.is_interactive() {
            return LogLevel::Warn;
        }

        self.settings_path()
            .ok()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| Settings::from_toml(&content).ok())
            .map(|settings| settings.general.log_level)
            .unwrap_or_default()
    }

    /// Opens the settings store.
    ///
    /// # Errors
    /// Returns `SettingsError::SettingsUnavailable` if the file cannot be
    /// created or parsed.
    pub fn open_store(&self) -> Result<SettingsStore, SettingsError> {
        let path = self
            .settings_path()
            .map_err(|e| SettingsError::SettingsUnavailable {
                details: e.to_string(),
            })?;

        SettingsStore::load_from(&path)
    }

    /// Runs the selected command, returning what to print.
    ///
    /// # Errors
    /// Returns whatever error the command reports.
    pub async fn execute(self) -> CommandResult {
        let settings_error = |e: SettingsError| CliError::SettingsError(e.to_string());

        match &self.command {
            Commands::Run { offline } => {
                let store = NewTab::store_or_defaults(self.open_store());
                commands::run::execute(store, *offline).await?;
                Ok(String::new())
            }
            Commands::Colour {
                time,
                mode,
                solid,
                plain,
            } => commands::colour::execute(time, *mode, *solid, *plain),
            Commands::Config(ConfigCommand::Get { path }) => {
                let store = self.open_store().map_err(settings_error)?;
                commands::config::get(&store, path)
            }
            Commands::Config(ConfigCommand::Set { path, value }) => {
                let store = self.open_store().map_err(settings_error)?;
                commands::config::set(&store, path, value)
            }
            Commands::Config(ConfigCommand::Schema) => commands::config::schema(),
            Commands::Config(ConfigCommand::Path) => {
                Ok(self.settings_path()?.display().to_string())
            }
        }
    }
}
