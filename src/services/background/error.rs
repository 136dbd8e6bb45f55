/// Errors from resolving a background image.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BackgroundError {
    /// The device is offline, so no image was requested
    #[error("network unavailable, background image skipped")]
    NetworkUnavailable,

    /// The image provider could not supply an image
    #[error("image provider failed: {details}")]
    ProviderFailed {
        /// What went wrong
        details: String,
    },

    /// The configured image URL is unusable
    #[error("invalid image URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}
