use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::task::JoinHandle;
use tracing::debug;

use super::common::Property;

/// How long a toast stays up unless told otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(2500);

/// A short message shown over the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toast {
    /// Whether the toast is on screen.
    pub visible: bool,
    /// Message text. Kept after hiding so it can fade out.
    pub text: String,
}

/// Shows toasts and hides them after a delay.
///
/// A newer toast replaces an older one, and the older one's timer no longer
/// hides it.
#[derive(Debug, Clone)]
pub struct ToastService {
    toast: Property<Toast>,
    generation: Arc<AtomicU64>,
}

impl ToastService {
    /// Service with no toast showing.
    pub fn new() -> Self {
        Self {
            toast: Property::new(Toast::default()),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current toast.
    pub fn toast(&self) -> &Property<Toast> {
        &self.toast
    }

    /// Shows `text` for `duration`.
    pub fn show(&self, text: impl Into<String>, duration: Duration) -> JoinHandle<()> {
        let text = text.into();
        debug!(%text, ?duration, "Showing toast");

        let mut generation = 0;
        self.toast.update(|toast| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *toast = Toast {
                visible: true,
                text,
            };
            true
        });

        let service = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;

            service.toast.update(|toast| {
                if service.generation.load(Ordering::SeqCst) != generation || !toast.visible {
                    return false;
                }
                toast.visible = false;
                true
            });
        })
    }

    /// Shows `text` for [`DEFAULT_TOAST_DURATION`].
    pub fn show_default(&self, text: impl Into<String>) -> JoinHandle<()> {
        self.show(text, DEFAULT_TOAST_DURATION)
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}
