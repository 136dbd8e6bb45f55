use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::{
    colour::{self, HexColour},
    config::{ColourMode, Settings},
};

use super::TimeOfDay;

/// What the page shows after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// Current time of day.
    pub time: TimeOfDay,
    /// Current page colour.
    pub colour: HexColour,
    /// Current local date.
    pub date: NaiveDate,
}

impl ClockSnapshot {
    /// Snapshot at `now` with an explicit colour.
    pub fn at(now: NaiveDateTime, colour: HexColour) -> Self {
        Self {
            time: TimeOfDay::from(&now.time()),
            colour,
            date: now.date(),
        }
    }
}

/// Colour for `mode` at `time`, or `None` for modes not driven by the clock.
pub fn colour_for(mode: ColourMode, time: &TimeOfDay) -> Option<HexColour> {
    match mode {
        ColourMode::Solid => None,
        ColourMode::Random => Some(colour::random()),
        ColourMode::Full => Some(colour::second_to_hex_colour(time.seconds_in_day())),
        ColourMode::Hue => Some(colour::second_to_hue_colour(time.seconds_in_day())),
        ColourMode::Regular => Some(colour::time_digits_colour(
            time.hour,
            time.minute,
            time.second,
        )),
    }
}

/// Tick policy of the clock, free of any timer.
///
/// Decides which colour function applies and when the date is refreshed.
#[derive(Debug, Clone)]
pub struct ClockState {
    mode: ColourMode,
    colour_visible: bool,
    snapshot: ClockSnapshot,
}

impl ClockState {
    /// State for `now` using default settings.
    pub fn new(now: NaiveDateTime) -> Self {
        let mode = ColourMode::default();
        let time = TimeOfDay::from(&now.time());
        let colour = colour_for(mode, &time).unwrap_or(HexColour::BLACK);

        Self {
            mode,
            colour_visible: true,
            snapshot: ClockSnapshot::at(now, colour),
        }
    }

    /// Adopts newly loaded settings.
    ///
    /// A solid colour is set here and never derived from the clock. Other
    /// modes are recomputed immediately so the page does not wait a second.
    pub fn apply_settings(&mut self, settings: &Settings, now: NaiveDateTime) {
        self.mode = settings.colour;

        let time = TimeOfDay::from(&now.time());
        self.snapshot.time = time;
        self.snapshot.date = now.date();
        self.snapshot.colour =
            colour_for(self.mode, &time).unwrap_or(settings.colour_solid);

        debug!(mode = %self.mode, colour = %self.snapshot.colour, "Clock settings applied");
    }

    /// Advances to `now` and returns the new snapshot.
    ///
    /// The date is refreshed on the first tick of a new day, which is
    /// midnight unless ticks were missed. The colour is left alone in solid
    /// mode and while the colour layer is fully transparent.
    pub fn tick(&mut self, now: NaiveDateTime) -> ClockSnapshot {
        let time = TimeOfDay::from(&now.time());
        self.snapshot.time = time;

        if now.date() != self.snapshot.date {
            debug!(date = %now.date(), "New day");
            self.snapshot.date = now.date();
        }

        if self.colour_visible
            && let Some(colour) = colour_for(self.mode, &time)
        {
            self.snapshot.colour = colour;
        }

        self.snapshot
    }

    /// Shows or hides the colour layer.
    ///
    /// While hidden, ticks keep the time current but leave the colour as is.
    pub fn set_colour_visible(&mut self, visible: bool) {
        self.colour_visible = visible;
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> ClockSnapshot {
        self.snapshot
    }

    /// Active colour mode.
    pub fn mode(&self) -> ColourMode {
        self.mode
    }

    /// Whether the colour layer is visible at all.
    pub fn colour_visible(&self) -> bool {
        self.colour_visible
    }
}
