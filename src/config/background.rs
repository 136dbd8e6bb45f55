use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Source of the background image behind the colour layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    /// Colour only.
    #[default]
    None,

    /// A photo from Unsplash, refreshed per `bgUnsplashFreq`.
    Unsplash,

    /// The image at `bgCustomUrl`.
    Custom,
}

/// How often the Unsplash background changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum UnsplashFrequency {
    /// A new image for every new tab.
    PerSession,

    /// One image per day.
    #[default]
    Daily,

    /// One image per week.
    Weekly,
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundMode::None => write!(f, "none"),
            BackgroundMode::Unsplash => write!(f, "unsplash"),
            BackgroundMode::Custom => write!(f, "custom"),
        }
    }
}

impl fmt::Display for UnsplashFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsplashFrequency::PerSession => write!(f, "perSession"),
            UnsplashFrequency::Daily => write!(f, "daily"),
            UnsplashFrequency::Weekly => write!(f, "weekly"),
        }
    }
}
