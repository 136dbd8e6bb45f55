use std::{path::PathBuf, time::Instant};

use toml::Value;

/// A single settings field that changed.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsChange {
    /// Path to the changed field using dot notation (e.g., "bgOpacity" or "general.log_level").
    pub path: String,
    /// The previous value of the field, if available.
    pub old_value: Option<Value>,
    /// The new value of the field.
    pub new_value: Value,
    /// When the change occurred.
    pub timestamp: Instant,
}

/// Errors that can occur in the settings store.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The specified settings path does not exist.
    #[error("Invalid settings path: {0}")]
    InvalidPath(String),

    /// The value type does not match the expected type for the field.
    #[error("Type mismatch at {path}: Expected {expected_type}, got {actual_value:?}")]
    TypeMismatch {
        /// The path where the type mismatch occurred.
        path: String,
        /// The expected type name.
        expected_type: &'static str,
        /// The actual value that was provided.
        actual_value: Value,
    },

    /// The new value produced settings that fail validation.
    #[error("invalid value for '{path}': {details}")]
    Validation {
        /// Path that was being set
        path: String,
        /// Why the resulting settings are invalid
        details: String,
    },

    /// Settings could not be loaded at all; callers fall back to defaults.
    #[error("settings unavailable: {details}")]
    SettingsUnavailable {
        /// Why loading failed
        details: String,
    },

    /// Error occurred while persisting settings to disk
    #[error("failed to persist settings to '{path}': {details}")]
    PersistenceError {
        /// Path where persistence failed
        path: PathBuf,
        /// Error details from the persistence operation
        details: String,
    },

    /// Error occurred while serializing settings
    #[error("failed to serialize {content_type}: {details}")]
    SerializationError {
        /// Type of content being serialized
        content_type: String,
        /// Serialization error details
        details: String,
    },

    /// Failed to convert between settings formats or types
    #[error("failed to convert {from} to {to}: {details}")]
    ConversionError {
        /// Source format/type
        from: String,
        /// Target format/type
        to: String,
        /// Conversion error details
        details: String,
    },

    /// Failed to initialize file watcher
    #[error("failed to initialize file watcher: {details}")]
    FileWatcherInitError {
        /// File watcher initialization error details
        details: String,
    },

    /// Error occurred while watching a specific file
    #[error("file watcher error for '{path}': {details}")]
    FileWatchError {
        /// Path being watched when error occurred
        path: PathBuf,
        /// File watcher error details
        details: String,
    },

    /// Error occurred while acquiring locks for thread-safe access
    #[error("failed to acquire {lock_type} lock: {details}")]
    LockError {
        /// Type of lock that failed (read, write)
        lock_type: String,
        /// Lock error details
        details: String,
    },

    /// A required service is unavailable
    #[error("{service} service unavailable: {details}")]
    ServiceUnavailable {
        /// Name of the service that is unavailable
        service: String,
        /// Details about why the service is unavailable
        details: String,
    },
}

impl SettingsChange {
    /// Creates a new settings change.
    ///
    /// # Arguments
    ///
    /// * `path` - The dot-separated path to the settings field
    /// * `old_value` - The previous value of the field (if known)
    /// * `new_value` - The new value of the field
    pub fn new(path: String, old_value: Option<Value>, new_value: Value) -> Self {
        Self {
            path,
            old_value,
            new_value,
            timestamp: Instant::now(),
        }
    }

    /// Extracts the new value as a specific type.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::TypeMismatch` if the value cannot be deserialized
    /// into the requested type.
    pub fn extract<T>(&self) -> Result<T, SettingsError>
    where
        T: serde::de::DeserializeOwned,
    {
        T::deserialize(self.new_value.clone()).map_err(|_| SettingsError::TypeMismatch {
            path: self.path.clone(),
            expected_type: std::any::type_name::<T>(),
            actual_value: self.new_value.clone(),
        })
    }

    /// Attempts to extract the new value as a string.
    ///
    /// Returns `None` if the value is not a string.
    pub fn as_string(&self) -> Option<String> {
        match &self.new_value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}
