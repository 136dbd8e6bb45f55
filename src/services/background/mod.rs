//! Background image behind the colour layer.

mod error;
mod provider;
mod service;

#[cfg(test)]
mod tests;

pub use error::BackgroundError;
pub use provider::{ImageProvider, UNSPLASH_BASE_URL, UnsplashProvider};
pub use service::{BackgroundService, BackgroundState};
