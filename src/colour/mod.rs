//! Time-of-day colour computation and colour-space conversions.
//!
//! Everything in this module is pure: the same second of the day always
//! maps to the same colour, except for [`random`].

mod convert;
mod error;
mod format;
mod hex;


pub use convert::{
    LAST_SECOND, SECONDS_PER_DAY, hex_to_rgb, hsl_to_rgb, random, rgb_to_hex, rgb_to_hsl, rgba,
    second_to_hex_colour, second_to_hue_colour, time_digits_colour,
};
pub use error::ColourError;
pub use format::ColourFormat;
pub use hex::{HexColour, Rgb};
