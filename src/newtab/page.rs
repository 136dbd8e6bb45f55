use std::sync::{Arc, Mutex, MutexGuard};

use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::Settings,
    services::{BackgroundService, ClockDriver, FontService, ToastService, common::Property},
    settings_store::{SettingsError, SettingsStore},
};

use super::{
    COPY_MANUALLY_MESSAGE, Clipboard, ColourHistory, RenderInputs, RenderModel, copied_message,
};

/// The new-tab page: clock, background, font and toasts wired to settings.
///
/// [`NewTab::mount`] loads settings, starts the clock and follows settings
/// changes. [`NewTab::unmount`] stops everything; dropping the page does too.
pub struct NewTab {
    store: SettingsStore,
    clock: Arc<ClockDriver>,
    background: BackgroundService,
    font: FontService,
    toasts: ToastService,
    settings: Property<Option<Settings>>,
    history: Arc<Mutex<ColourHistory>>,
    sidebar_open: Property<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl NewTab {
    /// Page with the system clock and network-backed background and font.
    pub fn new(store: SettingsStore) -> Self {
        Self::with_services(
            store,
            ClockDriver::system(),
            BackgroundService::new(),
            FontService::new(),
        )
    }

    /// Page with explicit services.
    pub fn with_services(
        store: SettingsStore,
        clock: ClockDriver,
        background: BackgroundService,
        font: FontService,
    ) -> Self {
        Self {
            store,
            clock: Arc::new(clock),
            background,
            font,
            toasts: ToastService::new(),
            settings: Property::new(None),
            history: Arc::new(Mutex::new(ColourHistory::default())),
            sidebar_open: Property::new(false),
            tasks: Vec::new(),
        }
    }

    /// The loaded store, or an in-memory store of defaults if loading failed.
    pub fn store_or_defaults(loaded: Result<SettingsStore, SettingsError>) -> SettingsStore {
        loaded.unwrap_or_else(|e| {
            warn!("Settings unavailable, using defaults: {e}");
            SettingsStore::with_defaults()
        })
    }

    /// Applies the current settings, starts the clock and listens for changes.
    ///
    /// Mounting twice restarts the listeners.
    ///
    /// # Errors
    /// Returns error if the settings store cannot accept a subscription.
    #[instrument(skip(self))]
    pub async fn mount(&mut self) -> Result<(), SettingsError> {
        self.stop_tasks();

        let mut changes = self.store.watch_settings("*").await?;
        self.apply(&self.store.get_settings());

        let listener = self.applier();
        self.tasks.push(tokio::spawn(async move {
            while let Some(settings) = changes.next().await {
                debug!("Settings changed");
                listener.apply(&settings);
            }
        }));

        let clock = Arc::clone(&self.clock);
        let mut backgrounds = self.background.state().watch();
        self.tasks.push(tokio::spawn(async move {
            while let Some(background) = backgrounds.next().await {
                clock.set_colour_visible(background.colour_visible());
            }
        }));

        let history = Arc::clone(&self.history);
        let mut snapshots = self.clock.snapshots();
        self.tasks.push(tokio::spawn(async move {
            while let Some(snapshot) = snapshots.next().await {
                lock(&history).push(snapshot.colour);
            }
        }));

        self.clock.start();
        info!("New tab mounted");

        Ok(())
    }

    /// Stops the clock and every listener. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.clock.stop();
        if !self.tasks.is_empty() {
            self.stop_tasks();
            info!("New tab unmounted");
        }
    }

    /// Draw-ready model of the current state.
    pub fn render_model(&self) -> RenderModel {
        let settings = self.settings.get();
        let background = self.background.state().get();
        let font = self.font.state().get();
        let toast = self.toasts.toast().get();
        let history = lock(&self.history).clone();

        RenderModel::build(&RenderInputs {
            settings: settings.as_ref(),
            clock: self.clock.snapshot(),
            background: &background,
            font: &font,
            toast: &toast,
            history: &history,
            sidebar_open: self.sidebar_open.get(),
        })
    }

    /// Opens the sidebar if closed, closes it if open.
    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| {
            *open = !*open;
            true
        });
    }

    /// Copies `text` to `clipboard` and reports the outcome in a toast.
    pub fn copy(&self, text: &str, clipboard: &dyn Clipboard) -> JoinHandle<()> {
        match clipboard.write_text(text) {
            Ok(()) => self.toasts.show_default(copied_message(text)),
            Err(e) => {
                debug!("Copy failed: {e}");
                self.toasts.show_default(COPY_MANUALLY_MESSAGE)
            }
        }
    }

    /// Copies the current colour readout, or the hex colour if the readout is hidden.
    pub fn copy_colour(&self, clipboard: &dyn Clipboard) -> JoinHandle<()> {
        let text = self
            .render_model()
            .colour
            .unwrap_or_else(|| self.clock.snapshot().colour.to_string());
        self.copy(&text, clipboard)
    }

    /// The settings store behind the page.
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// The clock driving the page.
    pub fn clock(&self) -> &ClockDriver {
        &self.clock
    }

    /// Toasts shown on the page.
    pub fn toasts(&self) -> &ToastService {
        &self.toasts
    }

    /// Settings as last applied, `None` before mounting.
    pub fn settings(&self) -> &Property<Option<Settings>> {
        &self.settings
    }

    fn apply(&self, settings: &Settings) {
        self.applier().apply(settings);
    }

    fn applier(&self) -> Applier {
        Applier {
            clock: Arc::clone(&self.clock),
            background: self.background.clone(),
            font: self.font.clone(),
            settings: self.settings.clone(),
        }
    }

    fn stop_tasks(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for NewTab {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[derive(Clone)]
struct Applier {
    clock: Arc<ClockDriver>,
    background: BackgroundService,
    font: FontService,
    settings: Property<Option<Settings>>,
}

impl Applier {
    fn apply(&self, settings: &Settings) {
        self.clock.apply_settings(settings);
        self.background.apply(settings);
        self.font.apply(settings);
        self.settings.set(Some(settings.clone()));
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
