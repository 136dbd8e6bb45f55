use crate::{
    colour::{self, HexColour},
    config::{ColourMode, Settings},
    services::{BackgroundState, ClockSnapshot, FontState, Toast},
};

use super::ColourHistory;

/// Root class of the page.
pub const CLASS_ROOT: &str = "colours";
/// Colour transitions disabled.
pub const CLASS_NO_TRANSITION: &str = "notransition";
/// Text protection over a busy backdrop.
pub const CLASS_FULL: &str = "full";
/// Page narrowed to make room for the sidebar.
pub const CLASS_SHRINK: &str = "colours--shrink";
/// Page hidden until settings arrive.
pub const CLASS_HIDDEN: &str = "colours--hidden";

/// Page where the options live.
pub const OPTIONS_PAGE: &str = "options.html";

/// Shortcut buttons in the page corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Button {
    /// Opens the options page.
    Options,
    /// Switches to the browser's default new tab.
    DefaultNewTab,
    /// Opens the background image.
    OpenImage(String),
    /// Opens or closes the sidebar.
    Sidebar,
}

impl Button {
    /// Tooltip text.
    pub fn title(&self) -> &'static str {
        match self {
            Button::Options => "Options",
            Button::DefaultNewTab => "Default new tab",
            Button::OpenImage(_) => "Open image",
            Button::Sidebar => "Open sidebar",
        }
    }
}

/// Everything the page state is made of at one moment.
#[derive(Debug, Clone, Copy)]
pub struct RenderInputs<'a> {
    /// Settings, once loaded.
    pub settings: Option<&'a Settings>,
    /// Latest clock tick.
    pub clock: ClockSnapshot,
    /// Background image and colour layer opacity.
    pub background: &'a BackgroundState,
    /// Typeface.
    pub font: &'a FontState,
    /// Toast, visible or not.
    pub toast: &'a Toast,
    /// Recent colours.
    pub history: &'a ColourHistory,
    /// Whether the sidebar is open.
    pub sidebar_open: bool,
}

/// What a view should draw. Computed from [`RenderInputs`] with no side effects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderModel {
    /// Classes on the page root, in order.
    pub classes: Vec<&'static str>,
    /// False until settings have been loaded; nothing else is drawn before then.
    pub loaded: bool,
    /// Page colour from the latest tick.
    pub page_colour: HexColour,
    /// Background image URL.
    pub background_image: Option<String>,
    /// Colour layer fill: `rgba(...)` over an image, `#rrggbb` when opaque,
    /// absent when fully transparent.
    pub background_colour: Option<String>,
    /// Shortcut buttons, in display order.
    pub buttons: Vec<Button>,
    /// Time readout.
    pub time: Option<String>,
    /// Date readout, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Colour readout in the configured format.
    pub colour: Option<String>,
    /// Colour ticker, newest first.
    pub history: Option<Vec<HexColour>>,
    /// Text of the visible toast.
    pub toast: Option<String>,
    /// Style rule applying the web font.
    pub font_rule: Option<String>,
}

impl RenderModel {
    /// Classes joined with spaces.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Builds the model for `inputs`.
    pub fn build(inputs: &RenderInputs<'_>) -> Self {
        let mut classes = vec![CLASS_ROOT];

        let Some(settings) = inputs.settings else {
            classes.push(CLASS_HIDDEN);
            if inputs.sidebar_open {
                classes.push(CLASS_SHRINK);
            }
            return Self {
                classes,
                page_colour: inputs.clock.colour,
                ..Self::default()
            };
        };

        if !settings.animations {
            classes.push(CLASS_NO_TRANSITION);
        }
        if settings.needs_full_protection() {
            classes.push(CLASS_FULL);
        }
        if inputs.sidebar_open {
            classes.push(CLASS_SHRINK);
        }

        let background = inputs.background;
        let colour = inputs.clock.colour;

        Self {
            classes,
            loaded: true,
            page_colour: colour,
            background_image: background.image.clone(),
            background_colour: background_fill(colour, background.opacity),
            buttons: buttons(settings, background),
            time: settings
                .show_time
                .then(|| inputs.clock.time.display(settings.time_24hr, settings.show_time_sec)),
            date: settings
                .show_date
                .then(|| inputs.clock.date.format("%Y-%m-%d").to_string()),
            colour: (settings.show_colour && background.colour_visible())
                .then(|| settings.colour_format.format(colour)),
            history: (settings.ticker && settings.colour != ColourMode::Solid)
                .then(|| inputs.history.colours().collect()),
            toast: inputs.toast.visible.then(|| inputs.toast.text.clone()),
            font_rule: inputs.font.css_rule(),
        }
    }
}

/// Draws a [`RenderModel`].
pub trait View {
    /// Error raised while drawing.
    type Error;

    /// Draws `model`, replacing whatever was drawn before.
    fn render(&mut self, model: &RenderModel) -> Result<(), Self::Error>;
}

fn background_fill(colour: HexColour, opacity: f64) -> Option<String> {
    if opacity <= 0.0 {
        None
    } else if opacity < 1.0 {
        Some(colour::rgba(&colour.to_string(), opacity).unwrap_or_else(|_| colour.to_string()))
    } else {
        Some(colour.to_string())
    }
}

fn buttons(settings: &Settings, background: &BackgroundState) -> Vec<Button> {
    let mut buttons = Vec::new();

    if settings.shortcut_opts {
        buttons.push(Button::Options);
    }
    if settings.shortcut_new_tab {
        buttons.push(Button::DefaultNewTab);
    }
    if settings.shortcut_image
        && let Some(image) = &background.image
    {
        buttons.push(Button::OpenImage(image.clone()));
    }
    buttons.push(Button::Sidebar);

    buttons
}
