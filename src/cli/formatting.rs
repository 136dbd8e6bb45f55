//! Formatting utilities for CLI output.
//!
//! Provides consistent formatting for settings values and styled terminal
//! output, including 24-bit colour swatches.

use toml::Value;

use crate::colour::{HexColour, Rgb};

/// ANSI escape codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
    /// Clear the current line and return to its start
    pub const CLEAR_LINE: &'static str = "\r\x1b[2K";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// A block of `width` cells filled with `colour` using 24-bit background escapes.
pub fn swatch(colour: HexColour, width: usize) -> String {
    let Rgb { r, g, b } = colour.rgb();
    format!("\x1b[48;2;{r};{g};{b}m{}{}", " ".repeat(width), Colors::RESET)
}

/// Formats a TOML value for human-readable CLI output.
///
/// Complex types like arrays and tables show their size rather than full
/// contents.
///
/// # Examples
///
/// ```
/// use colours::cli::formatting::format_toml_value;
///
/// let value = toml::Value::String("hue".to_string());
/// assert_eq!(format_toml_value(&value), "\"hue\"");
///
/// let value = toml::Value::Integer(75);
/// assert_eq!(format_toml_value(&value), "75");
/// ```
pub fn format_toml_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Array(arr) => format!("[{}]", arr.len()),
        Value::Table(table) => format!("{{{}}}", table.len()),
        Value::Datetime(datetime) => datetime.to_string(),
    }
}

/// Parses a command-line value into the TOML type it looks like.
///
/// Booleans and integers are recognized; everything else, including hex
/// colours, stays a string.
pub fn parse_toml_value(value: &str) -> Value {
    if let Ok(b) = value.parse::<bool>() {
        return Value::Boolean(b);
    }

    if let Ok(i) = value.parse::<i64>() {
        return Value::Integer(i);
    }

    if let Ok(f) = value.parse::<f64>() {
        return Value::Float(f);
    }

    Value::String(value.to_string())
}
