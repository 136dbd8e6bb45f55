use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::{BackgroundMode, Settings},
    services::{
        common::Property,
        connectivity::{Connectivity, TcpProbe},
    },
};

use super::{BackgroundError, ImageProvider, UnsplashProvider};

/// Background image and the opacity of the colour layer above it.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundState {
    /// Image URL, if an image is shown.
    pub image: Option<String>,
    /// Opacity of the colour layer, 0-1. Always 1 without an image.
    pub opacity: f64,
}

impl BackgroundState {
    /// Image with the colour layer at `opacity`.
    pub fn with_image(url: String, opacity: f64) -> Self {
        Self {
            image: Some(url),
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Whether the colour layer can be seen at all.
    pub fn colour_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self {
            image: None,
            opacity: 1.0,
        }
    }
}

/// Resolves the background image for the current settings.
///
/// Resolution runs in the background; the tick path never waits for it.
/// Only the most recent [`apply`](Self::apply) may publish its result.
#[derive(Clone)]
pub struct BackgroundService {
    provider: Arc<dyn ImageProvider>,
    connectivity: Arc<dyn Connectivity>,
    state: Property<BackgroundState>,
    generation: Arc<AtomicU64>,
}

impl BackgroundService {
    /// Service using Unsplash and a TCP connectivity probe.
    pub fn new() -> Self {
        Self::with(Arc::new(UnsplashProvider::default()), Arc::new(TcpProbe::default()))
    }

    /// Service with explicit collaborators.
    pub fn with(provider: Arc<dyn ImageProvider>, connectivity: Arc<dyn Connectivity>) -> Self {
        Self {
            provider,
            connectivity,
            state: Property::new(BackgroundState::default()),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current background.
    pub fn state(&self) -> &Property<BackgroundState> {
        &self.state
    }

    /// Works out the background `settings` ask for.
    ///
    /// # Errors
    /// * `BackgroundError::NetworkUnavailable` - An image is wanted but the device is offline
    /// * `BackgroundError::ProviderFailed` - The image provider failed
    /// * `BackgroundError::InvalidUrl` - The custom URL is unusable
    pub async fn resolve(&self, settings: &Settings) -> Result<BackgroundState, BackgroundError> {
        let opacity = settings.bg_opacity_fraction();

        match settings.bg {
            BackgroundMode::None => Ok(BackgroundState::default()),
            BackgroundMode::Custom if settings.bg_custom_url.is_empty() => {
                Ok(BackgroundState::default())
            }
            mode => {
                if !self.connectivity.is_online().await {
                    return Err(BackgroundError::NetworkUnavailable);
                }

                let url = if mode == BackgroundMode::Unsplash {
                    self.provider.image_url(settings.bg_unsplash_freq).await?
                } else {
                    validate_url(&settings.bg_custom_url)?
                };

                Ok(BackgroundState::with_image(url, opacity))
            }
        }
    }

    /// Resolves and publishes the background without blocking the caller.
    ///
    /// Offline, the background is cleared. Any other failure is logged and
    /// the previous background stays. A result that arrives after a newer
    /// `apply` has started is dropped.
    #[instrument(skip_all, fields(bg = %settings.bg))]
    pub fn apply(&self, settings: &Settings) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let service = self.clone();
        let settings = settings.clone();

        tokio::spawn(async move {
            let state = match service.resolve(&settings).await {
                Ok(state) => state,
                Err(BackgroundError::NetworkUnavailable) => {
                    debug!("Offline, showing colour only");
                    BackgroundState::default()
                }
                Err(e) => {
                    warn!("Keeping previous background: {e}");
                    return;
                }
            };

            if service.publish(generation, state) {
                info!(generation, "Background updated");
            } else {
                debug!(generation, "Discarding superseded background");
            }
        })
    }

    fn publish(&self, generation: u64, state: BackgroundState) -> bool {
        let mut current_generation = false;

        self.state.update(|current| {
            current_generation = self.generation.load(Ordering::SeqCst) == generation;
            if !current_generation || *current == state {
                return false;
            }
            *current = state;
            true
        });

        current_generation
    }
}

impl Default for BackgroundService {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_url(url: &str) -> Result<String, BackgroundError> {
    let invalid = |reason: &str| BackgroundError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    if url.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }

    match url.split_once("://") {
        Some((scheme, rest)) if !scheme.is_empty() && !rest.is_empty() => Ok(url.to_string()),
        _ => Err(invalid("expected scheme://location")),
    }
}
