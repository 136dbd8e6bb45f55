use thiserror::Error;

/// Errors that can occur during CLI command execution.
///
/// Each variant carries enough context for the message printed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    ///
    /// Returned when an argument parses but makes no sense, such as a time
    /// of day with 61 minutes.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An error occurred in the settings system.
    ///
    /// This wraps errors from the settings store, such as invalid paths,
    /// type mismatches, or file system issues.
    #[error("Settings error: {0}")]
    SettingsError(String),

    /// A page service failed to start.
    #[error("Service error: {0}")]
    ServiceError(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// Commands return the text to print on success.
pub type CommandResult = Result<String, CliError>;
