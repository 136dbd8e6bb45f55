/// Errors from loading a web font.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// The device is offline, so the font was not requested
    #[error("network unavailable, web font skipped")]
    NetworkUnavailable,

    /// The family name cannot be requested
    #[error("invalid font family '{family}'")]
    InvalidFamily {
        /// The rejected family name
        family: String,
    },

    /// The font service failed to deliver the font
    #[error("failed to load font '{family}': {details}")]
    LoadFailed {
        /// Requested family
        family: String,
        /// What went wrong
        details: String,
    },
}
