use std::io::{self, Write};

use crate::{
    cli::formatting::{Colors, format_description, swatch},
    newtab::{RenderModel, View},
};

/// Draws the page as a single, constantly redrawn terminal line.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    /// View writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// The underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalView<io::Stdout> {
    /// View writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

/// Text for one frame, without the line-clearing prefix.
pub fn frame(model: &RenderModel) -> String {
    if !model.loaded {
        return format_description("loading settings...");
    }

    let mut parts = Vec::new();

    if model.background_colour.is_some() {
        parts.push(swatch(model.page_colour, 6));
    }
    if let Some(time) = &model.time {
        parts.push(format!("{}{time}{}", Colors::BOLD, Colors::RESET));
    }
    if let Some(date) = &model.date {
        parts.push(date.clone());
    }
    if let Some(readout) = &model.colour {
        parts.push(readout.clone());
    }
    if let Some(history) = &model.history {
        parts.push(history.iter().map(|colour| swatch(*colour, 1)).collect());
    }
    if let Some(image) = &model.background_image {
        parts.push(format_description(image));
    }
    if let Some(toast) = &model.toast {
        parts.push(format!("[{toast}]"));
    }

    parts.join("  ")
}

impl<W: Write> View for TerminalView<W> {
    type Error = io::Error;

    fn render(&mut self, model: &RenderModel) -> Result<(), Self::Error> {
        write!(self.out, "{}{}", Colors::CLEAR_LINE, frame(model))?;
        self.out.flush()
    }
}
