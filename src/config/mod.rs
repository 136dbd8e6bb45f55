//! Settings schema for the new-tab page.
//!
//! Mirrors the options page of the extension: colour mode, background,
//! font and display toggles. Field names on disk use the extension's
//! camelCase keys so an exported options object can be pasted in as TOML.

mod background;
mod colour;
mod font;
mod general;
mod loading;
mod paths;

#[cfg(test)]
mod tests;

pub use background::{BackgroundMode, UnsplashFrequency};
pub use colour::ColourMode;
pub use font::FontMode;
pub use general::{GeneralSettings, LogLevel};
pub use paths::ConfigPaths;

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::{
    ColoursError, Result,
    colour::{ColourFormat, HexColour},
};

/// Highest accepted value of `bgOpacity`.
pub const MAX_BG_OPACITY: u8 = 100;

/// Complete settings of the new-tab page.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// How the colour is derived from the time.
    pub colour: ColourMode,

    /// Colour shown when `colour` is `solid`.
    pub colour_solid: HexColour,

    /// Format of the colour readout.
    pub colour_format: ColourFormat,

    /// Background image source.
    pub bg: BackgroundMode,

    /// Refresh rate of Unsplash backgrounds.
    pub bg_unsplash_freq: UnsplashFrequency,

    /// Image URL used when `bg` is `custom`. Empty means no image.
    pub bg_custom_url: String,

    /// Opacity of the colour layer over a background image, in percent (0-100).
    pub bg_opacity: u8,

    /// Typeface selection.
    pub font: FontMode,

    /// Web font family used when `font` is `web`.
    pub font_web: String,

    /// Whether colour transitions are animated.
    pub animations: bool,

    /// 24-hour clock instead of 12-hour with AM/PM.
    #[serde(rename = "time24hr")]
    pub time_24hr: bool,

    /// Show the time.
    pub show_time: bool,

    /// Include seconds in the time.
    pub show_time_sec: bool,

    /// Show the date.
    pub show_date: bool,

    /// Show the colour readout.
    pub show_colour: bool,

    /// Show the ticker of recent colours.
    pub ticker: bool,

    /// Show the options shortcut button.
    pub shortcut_opts: bool,

    /// Show the "default new tab" shortcut button.
    pub shortcut_new_tab: bool,

    /// Show the "open image" shortcut button when a background is loaded.
    pub shortcut_image: bool,

    /// Application settings outside the page.
    pub general: GeneralSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            colour: ColourMode::Regular,
            colour_solid: HexColour::BLACK,
            colour_format: ColourFormat::Hex,
            bg: BackgroundMode::None,
            bg_unsplash_freq: UnsplashFrequency::Daily,
            bg_custom_url: String::new(),
            bg_opacity: 75,
            font: FontMode::Default,
            font_web: String::new(),
            animations: true,
            time_24hr: false,
            show_time: true,
            show_time_sec: true,
            show_date: false,
            show_colour: true,
            ticker: false,
            shortcut_opts: true,
            shortcut_new_tab: false,
            shortcut_image: true,
            general: GeneralSettings::default(),
        }
    }
}

impl Settings {
    /// Checks constraints the type system does not express.
    ///
    /// # Errors
    /// Returns `ColoursError::ConfigValidation` if `bgOpacity` exceeds 100.
    pub fn validate(&self) -> Result<()> {
        if self.bg_opacity > MAX_BG_OPACITY {
            return Err(ColoursError::ConfigValidation {
                component: "bgOpacity".to_string(),
                details: format!(
                    "{} is out of range 0-{MAX_BG_OPACITY}",
                    self.bg_opacity
                ),
            });
        }

        Ok(())
    }

    /// `bgOpacity` as a fraction in `[0, 1]`.
    pub fn bg_opacity_fraction(&self) -> f64 {
        f64::from(self.bg_opacity.min(MAX_BG_OPACITY)) / f64::from(MAX_BG_OPACITY)
    }

    /// Whether text needs protection from a busy backdrop.
    ///
    /// True unless the page shows the plain `#HHMMSS` colour with no image.
    pub fn needs_full_protection(&self) -> bool {
        self.colour != ColourMode::Regular || self.bg != BackgroundMode::None
    }

    /// JSON schema of the settings file.
    pub fn json_schema() -> serde_json::Value {
        schema_for!(Settings).to_value()
    }
}
