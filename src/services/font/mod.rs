//! Web font loading.

mod error;
mod loader;
mod service;

#[cfg(test)]
mod tests;

pub use error::FontError;
pub use loader::{FontLoader, GOOGLE_FONTS_CSS_URL, GoogleFontsLoader, WebFont};
pub use service::{FontService, FontState};
