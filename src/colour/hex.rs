use std::{borrow::Cow, fmt, str::FromStr};

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::ColourError;

const HEX_DIGITS: usize = 6;

/// A 24-bit colour, displayed as `#rrggbb`.
///
/// The inner value never exceeds `0xFFFFFF`, so the display form is always
/// `#` followed by six lowercase, zero-padded hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColour(u32);

/// An RGB triple with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl HexColour {
    /// Black, `#000000`.
    pub const BLACK: HexColour = HexColour(0x000000);

    /// White, `#ffffff`.
    pub const WHITE: HexColour = HexColour(0xFFFFFF);

    /// Builds a colour from a packed `0xRRGGBB` value, discarding any higher bits.
    pub const fn from_u32(value: u32) -> Self {
        HexColour(value & 0xFFFFFF)
    }

    /// The packed `0xRRGGBB` value.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Splits the colour into its channels.
    pub const fn rgb(self) -> Rgb {
        Rgb {
            r: (self.0 >> 16) as u8,
            g: ((self.0 >> 8) & 0xFF) as u8,
            b: (self.0 & 0xFF) as u8,
        }
    }
}

impl Rgb {
    /// Creates an RGB triple.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the channels into a hex colour.
    pub const fn to_hex(self) -> HexColour {
        HexColour(((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32)
    }
}

impl From<Rgb> for HexColour {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl From<HexColour> for Rgb {
    fn from(colour: HexColour) -> Self {
        colour.rgb()
    }
}

impl fmt::Display for HexColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for HexColour {
    type Err = ColourError;

    /// Parses `#rrggbb` or `rrggbb`, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        parse_hex_digits(digits, s).map(HexColour)
    }
}

/// Parses exactly six hex digits into a packed 24-bit value.
///
/// `original` is only used for error reporting.
pub(super) fn parse_hex_digits(digits: &str, original: &str) -> Result<u32, ColourError> {
    if digits.len() != HEX_DIGITS {
        return Err(ColourError::invalid(
            original,
            format!("expected {HEX_DIGITS} hex digits, found {}", digits.len()),
        ));
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColourError::invalid(
            original,
            format!("'{bad}' is not a hex digit"),
        ));
    }

    u32::from_str_radix(digits, 16).map_err(|e| ColourError::invalid(original, e.to_string()))
}

impl Serialize for HexColour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl JsonSchema for HexColour {
    fn schema_name() -> Cow<'static, str> {
        "HexColour".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^#?[0-9a-fA-F]{6}$",
            "description": "A colour in #rrggbb form"
        })
    }
}
