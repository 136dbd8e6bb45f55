//! Colours - the time of day as a colour.
//!
//! A new-tab page that shows the current time, date and a colour derived
//! from the time of day, optionally over a background image or in a web
//! font. The main pieces are:
//!
//! - Pure colour math mapping seconds of the day to colours
//! - A clock that ticks on wall-clock second boundaries
//! - A settings store with change notifications and file watching
//! - A view model any renderer can draw, plus a terminal renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use colours::colour::second_to_hue_colour;
//!
//! // Noon is half way round the hue wheel
//! assert_eq!(second_to_hue_colour(43_200).to_string(), "#00feff");
//! ```

/// Colour computation and conversions.
pub mod colour;

/// Settings schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Settings store with change tracking.
pub mod settings_store;

/// Clock, background, font and toast services.
pub mod services;

/// The new-tab page view model.
pub mod newtab;

/// Command-line interface.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{ColoursError, Result};
