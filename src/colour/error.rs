use thiserror::Error;

/// Errors produced by colour parsing and conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    /// The input is not a well-formed hex colour.
    #[error("invalid colour format '{input}': {reason}")]
    InvalidColourFormat {
        /// The rejected input
        input: String,
        /// Why the input was rejected
        reason: String,
    },
}

impl ColourError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        ColourError::InvalidColourFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
