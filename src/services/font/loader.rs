use async_trait::async_trait;

use super::FontError;

/// Stylesheet endpoint of Google Fonts.
pub const GOOGLE_FONTS_CSS_URL: &str = "https://fonts.googleapis.com/css?family=";

/// A loaded web font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebFont {
    /// Font family name.
    pub family: String,
    /// Stylesheet that declares the font.
    pub stylesheet: String,
}

#[async_trait]
/// Loads external fonts by family name.
pub trait FontLoader: Send + Sync {
    /// Loads `family`, resolving once the font can be used.
    async fn load(&self, family: &str) -> Result<WebFont, FontError>;
}

/// Fonts served by Google Fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleFontsLoader;

impl GoogleFontsLoader {
    /// Stylesheet URL for `family`, or `None` if the name is not a valid family.
    pub fn stylesheet_url(family: &str) -> Option<String> {
        let family = family.trim();
        let valid = !family.is_empty()
            && family
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-');

        valid.then(|| format!("{GOOGLE_FONTS_CSS_URL}{}", family.replace(' ', "+")))
    }
}

#[async_trait]
impl FontLoader for GoogleFontsLoader {
    async fn load(&self, family: &str) -> Result<WebFont, FontError> {
        let stylesheet =
            Self::stylesheet_url(family).ok_or_else(|| FontError::InvalidFamily {
                family: family.to_string(),
            })?;

        Ok(WebFont {
            family: family.trim().to_string(),
            stylesheet,
        })
    }
}
