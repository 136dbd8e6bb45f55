//! Settings store with change notifications.
//!
//! Holds the current settings, optionally backed by a TOML file that is
//! watched for edits, and tells subscribers which fields changed.

mod broadcast;
mod changes;
mod diff;
mod file_watcher;
mod file_watching;
mod path_ops;
mod store;

#[cfg(test)]
mod tests;

pub use broadcast::Subscription;
pub use changes::{SettingsChange, SettingsError};
pub use file_watcher::{FileEvent, FileEventKind, FileWatcher};
pub use store::SettingsStore;
