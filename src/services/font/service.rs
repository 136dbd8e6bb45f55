use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::{
    config::{FontMode, Settings},
    services::{
        common::Property,
        connectivity::{Connectivity, TcpProbe},
    },
};

use super::{FontError, FontLoader, GoogleFontsLoader, WebFont};

/// Typeface in use on the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontState {
    /// The built-in typeface.
    #[default]
    Default,
    /// A loaded web font.
    Web(WebFont),
}

impl FontState {
    /// Style rule forcing the web font on every element, if one is loaded.
    pub fn css_rule(&self) -> Option<String> {
        match self {
            FontState::Default => None,
            FontState::Web(font) => Some(format!(
                "* {{ font-family: '{}' !important; }}",
                font.family
            )),
        }
    }
}

/// Loads the configured web font, falling back to the default typeface.
#[derive(Clone)]
pub struct FontService {
    loader: Arc<dyn FontLoader>,
    connectivity: Arc<dyn Connectivity>,
    state: Property<FontState>,
    generation: Arc<AtomicU64>,
}

impl FontService {
    /// Service using Google Fonts and a TCP connectivity probe.
    pub fn new() -> Self {
        Self::with(Arc::new(GoogleFontsLoader), Arc::new(TcpProbe::default()))
    }

    /// Service with explicit collaborators.
    pub fn with(loader: Arc<dyn FontLoader>, connectivity: Arc<dyn Connectivity>) -> Self {
        Self {
            loader,
            connectivity,
            state: Property::new(FontState::Default),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current typeface.
    pub fn state(&self) -> &Property<FontState> {
        &self.state
    }

    /// Works out the typeface `settings` ask for.
    ///
    /// # Errors
    /// * `FontError::NetworkUnavailable` - A web font is wanted but the device is offline
    /// * `FontError::InvalidFamily` - `fontWeb` is not a usable family name
    /// * `FontError::LoadFailed` - The loader could not deliver the font
    pub async fn resolve(&self, settings: &Settings) -> Result<FontState, FontError> {
        match settings.font {
            FontMode::Default => Ok(FontState::Default),
            FontMode::Web => {
                if !self.connectivity.is_online().await {
                    return Err(FontError::NetworkUnavailable);
                }

                let font = self.loader.load(&settings.font_web).await?;
                Ok(FontState::Web(font))
            }
        }
    }

    /// Loads the configured font without blocking the caller.
    ///
    /// On any failure the default typeface is used. Results of an `apply`
    /// overtaken by a newer one are dropped.
    #[instrument(skip_all, fields(font = %settings.font_web))]
    pub fn apply(&self, settings: &Settings) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let service = self.clone();
        let settings = settings.clone();

        tokio::spawn(async move {
            let state = match service.resolve(&settings).await {
                Ok(state) => state,
                Err(FontError::NetworkUnavailable) => {
                    debug!("Offline, using default font");
                    FontState::Default
                }
                Err(e) => {
                    warn!("Falling back to default font: {e}");
                    FontState::Default
                }
            };

            let mut latest = false;
            service.state.update(|current| {
                latest = service.generation.load(Ordering::SeqCst) == generation;
                if !latest || *current == state {
                    return false;
                }
                *current = state.clone();
                true
            });

            if latest {
                info!(?state, "Font updated");
            } else {
                debug!(generation, "Discarding superseded font");
            }
        })
    }
}

impl Default for FontService {
    fn default() -> Self {
        Self::new()
    }
}
