use std::sync::Arc;

use futures::StreamExt;
use tracing::{info, warn};

use crate::{
    cli::{CliError, terminal::TerminalView},
    newtab::{NewTab, View},
    services::{
        BackgroundService, ClockDriver, FontService, background::UnsplashProvider,
        connectivity::FixedConnectivity, font::GoogleFontsLoader,
    },
    settings_store::SettingsStore,
};

/// Shows the live page in the terminal until Ctrl-C.
///
/// Edits to the settings file are picked up while running.
///
/// # Errors
/// Returns `CliError::ServiceError` if the page cannot subscribe to settings,
/// or `CliError::IoError` if the terminal cannot be written.
pub async fn execute(store: SettingsStore, offline: bool) -> Result<(), CliError> {
    let watcher = match store.start_file_watching() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Settings changes will not be picked up: {e}");
            None
        }
    };

    let mut page = if offline {
        let offline = Arc::new(FixedConnectivity(false));
        NewTab::with_services(
            store,
            ClockDriver::system(),
            BackgroundService::with(Arc::new(UnsplashProvider::default()), offline.clone()),
            FontService::with(Arc::new(GoogleFontsLoader), offline),
        )
    } else {
        NewTab::new(store)
    };

    page.mount()
        .await
        .map_err(|e| CliError::ServiceError(e.to_string()))?;

    let mut view = TerminalView::stdout();
    let mut snapshots = page.clock().snapshots();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let result = loop {
        tokio::select! {
            snapshot = snapshots.next() => {
                if snapshot.is_none() {
                    break Ok(());
                }
                if let Err(e) = view.render(&page.render_model()) {
                    break Err(CliError::from(e));
                }
            }
            _ = &mut ctrl_c => {
                info!("Interrupted");
                break Ok(());
            }
        }
    };

    page.unmount();
    if let Some(watcher) = watcher {
        watcher.abort();
    }
    println!();

    result
}
