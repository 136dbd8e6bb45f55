use std::path::{Path, PathBuf};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use tokio::sync::mpsc;

/// A file system event for a file inside a watched directory.
#[derive(Debug, Clone)]
pub struct FileEvent {
    /// The path of the file that changed
    pub path: PathBuf,
    /// The type of change that occurred
    pub kind: FileEventKind,
}

/// The type of file system change that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEventKind {
    /// File was modified
    Modified,
    /// File was created, including by an atomic rename
    Created,
    /// File was removed
    Removed,
}

/// Async wrapper over the notify crate.
///
/// Watches whole directories rather than single files: the settings file is
/// replaced by rename on save, which would orphan a watch on the old inode.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Creates a new file watcher and returns the watcher and event receiver.
    ///
    /// Uses an unbounded channel since file events are infrequent but bursty.
    ///
    /// # Errors
    /// Returns error if the underlying file system watcher cannot be initialized.
    pub fn new() -> Result<(Self, mpsc::UnboundedReceiver<FileEvent>), notify::Error> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let watcher = recommended_watcher(move |res: notify::Result<Event>| {
            let Ok(event) = res else {
                return;
            };

            let kind = match event.kind {
                EventKind::Create(_) => FileEventKind::Created,
                EventKind::Modify(_) => FileEventKind::Modified,
                EventKind::Remove(_) => FileEventKind::Removed,
                _ => return,
            };

            for path in event.paths {
                let _ = event_tx.send(FileEvent { path, kind });
            }
        })?;

        Ok((Self { watcher }, event_rx))
    }

    /// Starts watching the entries of `dir`, not recursing into subdirectories.
    ///
    /// # Errors
    /// Returns error if the watcher fails to monitor the directory.
    pub fn watch_dir(&mut self, dir: &Path) -> Result<(), notify::Error> {
        self.watcher.watch(dir, RecursiveMode::NonRecursive)
    }
}
