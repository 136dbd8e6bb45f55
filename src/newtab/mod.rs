//! The new-tab page, minus the pixels.
//!
//! Wires settings to the clock, background and font services and turns the
//! combined state into a [`RenderModel`] that any [`View`] can draw.

mod clipboard;
mod history;
mod page;
mod render;


pub use clipboard::{COPY_MANUALLY_MESSAGE, Clipboard, ClipboardError, copied_message};
pub use history::{ColourHistory, HISTORY_LEN};
pub use page::NewTab;
pub use render::{
    Button, CLASS_FULL, CLASS_HIDDEN, CLASS_NO_TRANSITION, CLASS_ROOT, CLASS_SHRINK, OPTIONS_PAGE,
    RenderInputs, RenderModel, View,
};
