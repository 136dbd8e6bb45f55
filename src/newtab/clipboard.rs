/// Clipboard write failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("clipboard unavailable: {details}")]
pub struct ClipboardError {
    /// Why the write failed
    pub details: String,
}

/// System clipboard.
pub trait Clipboard {
    /// Puts `text` on the clipboard.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Toast shown after a successful copy.
pub fn copied_message(text: &str) -> String {
    format!("Copied \"{text}\" to clipboard")
}

/// Toast shown when copying failed and the user has to copy by hand.
pub const COPY_MANUALLY_MESSAGE: &str = "Press Ctrl/⌘+C to copy";
