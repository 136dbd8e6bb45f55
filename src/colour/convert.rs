use super::{ColourError, HexColour, Rgb, hex::parse_hex_digits};

/// Number of seconds in one day.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// The last second of the day, 23:59:59.
pub const LAST_SECOND: u32 = SECONDS_PER_DAY - 1;

const FULL_RANGE: u64 = 0xFFFFFF;

/// Maps a second of the day linearly onto `#000000..=#ffffff`.
///
/// 00:00:00 is `#000000` and 23:59:59 is `#ffffff`. The result is rounded
/// half-up; inputs past the last second of the day are clamped to it.
pub fn second_to_hex_colour(second_in_day: u32) -> HexColour {
    let second = u64::from(second_in_day.min(LAST_SECOND));
    let last = u64::from(LAST_SECOND);
    let value = (second * FULL_RANGE + last / 2) / last;

    HexColour::from_u32(value as u32)
}

/// Maps a second of the day onto the hue wheel, one full turn per day.
///
/// 00:00:00 is `#ff0000` and 12:00:00 is `#00feff`.
pub fn second_to_hue_colour(second_in_day: u32) -> HexColour {
    let hue = f64::from(second_in_day.min(LAST_SECOND)) / f64::from(SECONDS_PER_DAY);
    let (r, g, b) = hsl_to_rgb(hue, 1.0, 0.5);

    rgb_to_hex(channel(r), channel(g), channel(b))
}

/// Builds `#HHMMSS` from the zero-padded decimal digits of a 24-hour time.
pub fn time_digits_colour(hour: u32, minute: u32, second: u32) -> HexColour {
    let digits = [hour / 10, hour % 10, minute / 10, minute % 10, second / 10, second % 10];
    let value = digits
        .iter()
        .fold(0u32, |acc, digit| (acc << 4) | (digit & 0xF));

    HexColour::from_u32(value)
}

/// Converts HSL to RGB.
///
/// `h`, `s` and `l` are in `[0, 1]`; the channels are returned unrounded in
/// `[0, 255]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    (r * 255.0, g * 255.0, b * 255.0)
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts RGB to HSL, each component in `[0, 1]`.
pub fn rgb_to_hsl(rgb: Rgb) -> (f64, f64, f64) {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// Packs RGB channels into a hex colour.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> HexColour {
    Rgb::new(r, g, b).to_hex()
}

/// Parses six hex digits (no leading `#`) into RGB channels.
///
/// # Errors
/// Returns `ColourError::InvalidColourFormat` if the input is not exactly six
/// hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColourError> {
    parse_hex_digits(hex, hex).map(|value| HexColour::from_u32(value).rgb())
}

/// Formats a `#`-prefixed hex colour as a CSS `rgba(...)` string.
///
/// Only the first six digits after the `#` are read; anything after them is
/// ignored. The alpha is written as given.
///
/// # Errors
/// Returns `ColourError::InvalidColourFormat` if the `#` is missing or fewer
/// than six hex digits follow it.
pub fn rgba(hex: &str, alpha: f64) -> Result<String, ColourError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| ColourError::invalid(hex, "missing leading '#'"))?;
    let digits = digits
        .get(..6)
        .ok_or_else(|| ColourError::invalid(hex, "expected 6 hex digits after '#'"))?;

    let Rgb { r, g, b } = HexColour::from_u32(parse_hex_digits(digits, hex)?).rgb();

    Ok(format!("rgba({r}, {g}, {b}, {alpha})"))
}

/// A uniformly random colour.
pub fn random() -> HexColour {
    HexColour::from_u32(fastrand::u32(..=0xFFFFFF))
}

fn channel(value: f64) -> u8 {
    value.trunc().clamp(0.0, 255.0) as u8
}
