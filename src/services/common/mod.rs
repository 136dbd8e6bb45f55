//! Common building blocks for services

/// Watchable values for publishing service state
pub mod property;

pub use property::Property;
