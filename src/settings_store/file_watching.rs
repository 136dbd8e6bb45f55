use std::{path::Path, time::Duration};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{SettingsError, SettingsStore, file_watcher::FileWatcher};

const DEBOUNCE: Duration = Duration::from_millis(500);

impl SettingsStore {
    /// Watches the backing file and reloads it when edited externally.
    ///
    /// Bursts of file events are debounced; each reload broadcasts only the
    /// fields that changed. A file that fails to parse is logged and the
    /// previous settings are kept. Aborting the returned handle stops watching.
    ///
    /// # Errors
    /// Returns error if the store has no backing file or the watcher cannot be
    /// initialized.
    pub fn start_file_watching(&self) -> Result<JoinHandle<()>, SettingsError> {
        let file = self
            .file()
            .ok_or_else(|| SettingsError::FileWatcherInitError {
                details: "store has no backing file".to_string(),
            })?
            .to_path_buf();

        let dir = file
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let (mut watcher, mut event_rx) =
            FileWatcher::new().map_err(|e| SettingsError::FileWatcherInitError {
                details: e.to_string(),
            })?;

        watcher
            .watch_dir(&dir)
            .map_err(|e| SettingsError::FileWatchError {
                path: dir.clone(),
                details: e.to_string(),
            })?;

        info!("Watching {} for changes", file.display());
        let store = self.clone();
        let file_name = file.file_name().map(ToOwned::to_owned);

        Ok(tokio::spawn(async move {
            let _watcher = watcher;
            let mut pending = false;

            let debounce_sleep = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(debounce_sleep);

            loop {
                tokio::select! {
                    event = event_rx.recv() => {
                        let Some(event) = event else { break };

                        if event.path.file_name() != file_name.as_deref() {
                            continue;
                        }

                        debug!(kind = ?event.kind, "Settings file event");
                        pending = true;
                        debounce_sleep.as_mut().reset(tokio::time::Instant::now() + DEBOUNCE);
                    }

                    _ = &mut debounce_sleep, if pending => {
                        pending = false;

                        match store.reload_from_file() {
                            Ok(changes) => debug!(count = changes.len(), "Settings reloaded"),
                            Err(e) => warn!("Failed to reload settings: {e}"),
                        }
                    }
                }
            }
        }))
    }
}
