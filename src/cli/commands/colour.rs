use chrono::NaiveTime;

use crate::{
    cli::{
        CliError, CommandResult,
        formatting::{format_description, swatch},
    },
    colour::{ColourFormat, HexColour},
    config::ColourMode,
    services::clock::{TimeOfDay, colour_for},
};

/// Parses `HH:MM:SS` or `HH:MM` into a time of day.
///
/// # Errors
/// Returns `CliError::InvalidArguments` for anything else.
pub fn parse_time(text: &str) -> Result<TimeOfDay, CliError> {
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .map(|time| TimeOfDay::from(&time))
        .map_err(|_| CliError::InvalidArguments(format!("'{text}' is not a time (HH:MM:SS)")))
}

/// Colour the page would show at `time`.
///
/// Solid mode shows `solid`.
///
/// # Errors
/// Returns `CliError::InvalidArguments` if `time` does not parse.
pub fn colour_at(time: &str, mode: ColourMode, solid: HexColour) -> Result<HexColour, CliError> {
    let time = parse_time(time)?;
    Ok(colour_for(mode, &time).unwrap_or(solid))
}

/// Shows the colour for `time` in every readout format, with a swatch.
///
/// # Errors
/// Returns `CliError::InvalidArguments` if `time` does not parse.
pub fn execute(time: &str, mode: ColourMode, solid: HexColour, plain: bool) -> CommandResult {
    let colour = colour_at(time, mode, solid)?;

    if plain {
        return Ok(colour.to_string());
    }

    let readouts = [ColourFormat::Hex, ColourFormat::Rgb, ColourFormat::Hsl]
        .map(|format| format.format(colour))
        .join("  ");

    Ok(format!(
        "{} {readouts}  {}",
        swatch(colour, 4),
        format_description(&format!("{mode} @ {time}"))
    ))
}
