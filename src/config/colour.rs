use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the page colour is derived from the time of day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColourMode {
    /// A fixed colour taken from `colourSolid`.
    Solid,

    /// The whole 24-bit range spread across the day, black at midnight.
    Full,

    /// One turn of the hue wheel per day, red at midnight.
    Hue,

    /// A new random colour every second.
    Random,

    /// The time digits read as a hex colour, `#HHMMSS`.
    #[default]
    Regular,
}

impl fmt::Display for ColourMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourMode::Solid => write!(f, "solid"),
            ColourMode::Full => write!(f, "full"),
            ColourMode::Hue => write!(f, "hue"),
            ColourMode::Random => write!(f, "random"),
            ColourMode::Regular => write!(f, "regular"),
        }
    }
}
