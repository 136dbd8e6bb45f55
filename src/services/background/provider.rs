use async_trait::async_trait;

use crate::config::UnsplashFrequency;

use super::BackgroundError;

/// Base URL of the Unsplash source endpoint.
pub const UNSPLASH_BASE_URL: &str = "https://source.unsplash.com/";

#[async_trait]
/// Supplies background image URLs.
pub trait ImageProvider: Send + Sync {
    /// Resolves an image URL for the given refresh frequency.
    async fn image_url(&self, frequency: UnsplashFrequency) -> Result<String, BackgroundError>;
}

/// Unsplash source images: a random one per session, or the daily/weekly pick.
#[derive(Debug, Clone)]
pub struct UnsplashProvider {
    base_url: String,
}

impl UnsplashProvider {
    /// Provider for a different endpoint with the same path layout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Image URL for `frequency`.
    pub fn url_for(&self, frequency: UnsplashFrequency) -> String {
        let path = match frequency {
            UnsplashFrequency::PerSession => "random",
            UnsplashFrequency::Daily => "daily",
            UnsplashFrequency::Weekly => "weekly",
        };

        let separator = if self.base_url.ends_with('/') { "" } else { "/" };
        format!("{}{separator}{path}", self.base_url)
    }
}

impl Default for UnsplashProvider {
    fn default() -> Self {
        Self::with_base_url(UNSPLASH_BASE_URL)
    }
}

#[async_trait]
impl ImageProvider for UnsplashProvider {
    async fn image_url(&self, frequency: UnsplashFrequency) -> Result<String, BackgroundError> {
        Ok(self.url_for(frequency))
    }
}
