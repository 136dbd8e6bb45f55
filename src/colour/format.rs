use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{HexColour, Rgb, convert::rgb_to_hsl};

/// How the colour readout is written on the page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColourFormat {
    /// `#1fd531`
    #[default]
    Hex,

    /// `rgb(31, 213, 49)`
    Rgb,

    /// `hsl(126, 74%, 48%)`
    Hsl,
}

impl ColourFormat {
    /// Writes `colour` in this format.
    pub fn format(self, colour: HexColour) -> String {
        match self {
            ColourFormat::Hex => colour.to_string(),
            ColourFormat::Rgb => {
                let Rgb { r, g, b } = colour.rgb();
                format!("rgb({r}, {g}, {b})")
            }
            ColourFormat::Hsl => {
                let (h, s, l) = rgb_to_hsl(colour.rgb());
                format!(
                    "hsl({}, {}%, {}%)",
                    (h * 360.0).round() as u32 % 360,
                    (s * 100.0).round() as u32,
                    (l * 100.0).round() as u32
                )
            }
        }
    }
}

impl fmt::Display for ColourFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourFormat::Hex => write!(f, "hex"),
            ColourFormat::Rgb => write!(f, "rgb"),
            ColourFormat::Hsl => write!(f, "hsl"),
        }
    }
}
