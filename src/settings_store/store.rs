use std::{
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockWriteGuard},
};

use futures::{StreamExt, stream::BoxStream};
use toml::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::{ConfigPaths, Settings};

use super::{
    SettingsChange, SettingsError, Subscription,
    broadcast::BroadcastService,
    diff::{diff_settings, to_value},
    path_ops::{navigate_path, set_value_at_path},
};

/// Thread-safe settings store with change notifications.
///
/// Holds the current [`Settings`], optionally backed by a TOML file, and
/// notifies subscribers of every field that changes. Must be created inside
/// a tokio runtime.
#[derive(Clone)]
pub struct SettingsStore {
    settings: Arc<RwLock<Settings>>,
    file: Option<PathBuf>,
    broadcast_service: BroadcastService,
}

impl SettingsStore {
    /// Creates an in-memory store holding default settings.
    pub fn with_defaults() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates an in-memory store holding `settings`.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            file: None,
            broadcast_service: BroadcastService::new(),
        }
    }

    /// Loads the store from the default settings file.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::SettingsUnavailable` if the settings file cannot
    /// be located, created or parsed.
    pub fn load() -> Result<Self, SettingsError> {
        let path = ConfigPaths::settings_file().map_err(|e| SettingsError::SettingsUnavailable {
            details: e.to_string(),
        })?;

        Self::load_from(&path)
    }

    /// Loads the store from a specific settings file.
    ///
    /// Writes go back to this file.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::SettingsUnavailable` if the file cannot be
    /// created or parsed.
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        info!("Loading settings from {}", path.display());

        let settings = Settings::load(path).map_err(|e| SettingsError::SettingsUnavailable {
            details: e.to_string(),
        })?;

        Ok(Self {
            settings: Arc::new(RwLock::new(settings)),
            file: Some(path.to_path_buf()),
            broadcast_service: BroadcastService::new(),
        })
    }

    /// The file backing this store, if any.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Returns a snapshot of the current settings, handling poisoned locks gracefully
    pub fn get_settings(&self) -> Settings {
        match self.settings.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Retrieves a settings value at the specified path
    ///
    /// # Arguments
    /// * `path` - Dot-separated path to the field (e.g., "bgOpacity")
    ///
    /// # Errors
    /// * `SettingsError::InvalidPath` - If the path doesn't exist
    /// * `SettingsError::SerializationError` - If the settings cannot be serialized
    pub fn get_by_path(&self, path: &str) -> Result<Value, SettingsError> {
        navigate_path(&to_value(&self.get_settings())?, path)
    }

    /// Sets a settings value at the specified path, persists and broadcasts the change
    ///
    /// # Arguments
    /// * `path` - Dot-separated path to an existing field (e.g., "colour")
    /// * `value` - The new TOML value
    ///
    /// # Errors
    /// * `SettingsError::InvalidPath` - If the path doesn't exist
    /// * `SettingsError::ConversionError` - If the value has the wrong shape for the field
    /// * `SettingsError::Validation` - If the resulting settings are out of range
    /// * `SettingsError::LockError` - If the write lock cannot be acquired
    /// * `SettingsError::PersistenceError` - If the settings cannot be saved to disk
    #[instrument(skip(self, value), fields(path = %path))]
    pub fn set_by_path(&self, path: &str, value: Value) -> Result<(), SettingsError> {
        let mut guard = self.write_lock()?;

        let mut settings_value = to_value(&*guard)?;
        let old_value = navigate_path(&settings_value, path)?;

        set_value_at_path(&mut settings_value, path, value.clone())?;

        let updated: Settings =
            settings_value
                .try_into()
                .map_err(|e: toml::de::Error| SettingsError::ConversionError {
                    from: "toml::Value".to_string(),
                    to: "Settings".to_string(),
                    details: e.to_string(),
                })?;

        updated.validate().map_err(|e| SettingsError::Validation {
            path: path.to_string(),
            details: e.to_string(),
        })?;

        self.persist(&updated)?;
        *guard = updated;
        drop(guard);

        debug!("Settings value updated");
        self.broadcast_changes(vec![SettingsChange::new(
            path.to_string(),
            Some(old_value),
            value,
        )]);

        Ok(())
    }

    /// Replaces all settings and broadcasts each field that differs.
    ///
    /// Does not write to disk; used when the file itself changed.
    ///
    /// # Errors
    /// * `SettingsError::SerializationError` - If either settings value cannot be serialized
    /// * `SettingsError::LockError` - If the write lock cannot be acquired
    pub fn replace(&self, new_settings: Settings) -> Result<Vec<SettingsChange>, SettingsError> {
        let mut guard = self.write_lock()?;
        let changes = diff_settings(&guard, &new_settings)?;

        if changes.is_empty() {
            return Ok(changes);
        }

        *guard = new_settings;
        drop(guard);

        self.broadcast_changes(changes.clone());

        Ok(changes)
    }

    /// Subscribe to changes matching the specified path pattern.
    ///
    /// # Arguments
    /// * `pattern` - Path pattern; `*` matches every change, `bg*` every background field
    ///
    /// # Errors
    /// Returns `SettingsError::ServiceUnavailable` if the broadcast service is unavailable.
    pub async fn subscribe(&self, pattern: &str) -> Result<Subscription, SettingsError> {
        self.broadcast_service.subscribe(pattern).await
    }

    /// Stream of complete settings snapshots, one per batch of matching changes.
    ///
    /// This is the "settings changed, fetch again" contract: consumers do
    /// not need to look at individual fields.
    ///
    /// # Errors
    /// Returns `SettingsError::ServiceUnavailable` if the broadcast service is unavailable.
    pub async fn watch_settings(
        &self,
        pattern: &str,
    ) -> Result<BoxStream<'static, Settings>, SettingsError> {
        let mut subscription = self.subscribe(pattern).await?;
        let store = self.clone();

        Ok(async_stream::stream! {
            while subscription.recv().await.is_some() {
                while subscription.try_recv().is_some() {}
                yield store.get_settings();
            }
        }
        .boxed())
    }

    /// Re-reads the backing file and broadcasts what changed.
    ///
    /// # Errors
    /// Returns `SettingsError::SettingsUnavailable` if there is no backing file
    /// or it cannot be parsed; the current settings are kept in that case.
    pub fn reload_from_file(&self) -> Result<Vec<SettingsChange>, SettingsError> {
        let path = self
            .file
            .as_deref()
            .ok_or_else(|| SettingsError::SettingsUnavailable {
                details: "store has no backing file".to_string(),
            })?;

        let settings = Settings::load(path).map_err(|e| SettingsError::SettingsUnavailable {
            details: e.to_string(),
        })?;

        self.replace(settings)
    }

    /// Write guard; hold it for the whole read-modify-write.
    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, Settings>, SettingsError> {
        self.settings.write().map_err(|e| SettingsError::LockError {
            lock_type: "write".to_string(),
            details: format!("Failed to acquire write lock: {e}"),
        })
    }

    fn persist(&self, settings: &Settings) -> Result<(), SettingsError> {
        let Some(path) = self.file.as_deref() else {
            return Ok(());
        };

        settings.save(path).map_err(|e| SettingsError::PersistenceError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }

    fn broadcast_changes(&self, changes: Vec<SettingsChange>) {
        let broadcast_service = self.broadcast_service.clone();
        tokio::spawn(async move {
            if let Err(e) = broadcast_service.broadcast(changes).await {
                warn!("Failed to broadcast settings change: {e}");
            }
        });
    }
}
