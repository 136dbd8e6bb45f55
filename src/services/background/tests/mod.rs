use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{
    config::{BackgroundMode, Settings, UnsplashFrequency},
    services::{
        background::{
            BackgroundError, BackgroundService, BackgroundState, ImageProvider, UnsplashProvider,
        },
        connectivity::FixedConnectivity,
    },
};

struct FailingProvider;

#[async_trait]
impl ImageProvider for FailingProvider {
    async fn image_url(&self, _frequency: UnsplashFrequency) -> Result<String, BackgroundError> {
        Err(BackgroundError::ProviderFailed {
            details: "rate limited".to_string(),
        })
    }
}

/// Answers after a delay, like a provider on a slow network.
struct SlowProvider;

#[async_trait]
impl ImageProvider for SlowProvider {
    async fn image_url(&self, _frequency: UnsplashFrequency) -> Result<String, BackgroundError> {
        tokio::time::sleep(Duration::from_secs(2)).await;
        Ok("https://slow.example/img".to_string())
    }
}

fn online() -> BackgroundService {
    BackgroundService::with(
        Arc::new(UnsplashProvider::default()),
        Arc::new(FixedConnectivity(true)),
    )
}

fn unsplash(frequency: UnsplashFrequency) -> Settings {
    Settings {
        bg: BackgroundMode::Unsplash,
        bg_unsplash_freq: frequency,
        bg_opacity: 40,
        ..Settings::default()
    }
}

#[test]
fn unsplash_urls_follow_frequency() {
    let provider = UnsplashProvider::default();
    assert_eq!(
        provider.url_for(UnsplashFrequency::PerSession),
        "https://source.unsplash.com/random"
    );
    assert_eq!(
        provider.url_for(UnsplashFrequency::Daily),
        "https://source.unsplash.com/daily"
    );
    assert_eq!(
        UnsplashProvider::with_base_url("http://localhost:8080").url_for(UnsplashFrequency::Weekly),
        "http://localhost:8080/weekly"
    );
}

#[tokio::test]
async fn resolves_unsplash_with_opacity() {
    let state = online()
        .resolve(&unsplash(UnsplashFrequency::Weekly))
        .await
        .unwrap();

    assert_eq!(state.image.as_deref(), Some("https://source.unsplash.com/weekly"));
    assert!((state.opacity - 0.4).abs() < f64::EPSILON);
    assert!(state.colour_visible());
}

#[tokio::test]
async fn no_image_means_opaque_colour() {
    let service = online();

    let none = service.resolve(&Settings::default()).await.unwrap();
    assert_eq!(none, BackgroundState::default());

    let empty_custom = Settings {
        bg: BackgroundMode::Custom,
        bg_opacity: 0,
        ..Settings::default()
    };
    let state = service.resolve(&empty_custom).await.unwrap();
    assert_eq!(state.image, None);
    assert!((state.opacity - 1.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn custom_urls_are_checked() {
    let service = online();
    let mut settings = Settings {
        bg: BackgroundMode::Custom,
        bg_custom_url: "https://example.com/sky.jpg".to_string(),
        bg_opacity: 0,
        ..Settings::default()
    };

    let state = service.resolve(&settings).await.unwrap();
    assert_eq!(state.image.as_deref(), Some("https://example.com/sky.jpg"));
    assert!(!state.colour_visible());

    settings.bg_custom_url = "not a url".to_string();
    assert!(matches!(
        service.resolve(&settings).await,
        Err(BackgroundError::InvalidUrl { .. })
    ));
}

#[tokio::test]
async fn offline_clears_background() {
    let service = BackgroundService::with(
        Arc::new(UnsplashProvider::default()),
        Arc::new(FixedConnectivity(false)),
    );
    let settings = unsplash(UnsplashFrequency::Daily);

    assert_eq!(
        service.resolve(&settings).await,
        Err(BackgroundError::NetworkUnavailable)
    );

    service.apply(&settings).await.unwrap();
    assert_eq!(service.state().get(), BackgroundState::default());
}

#[tokio::test]
async fn provider_failure_keeps_previous_background() {
    let service = BackgroundService::with(Arc::new(FailingProvider), Arc::new(FixedConnectivity(true)));
    let custom = Settings {
        bg: BackgroundMode::Custom,
        bg_custom_url: "https://example.com/sea.png".to_string(),
        ..Settings::default()
    };

    service.apply(&custom).await.unwrap();
    let previous = service.state().get();
    assert_eq!(previous.image.as_deref(), Some("https://example.com/sea.png"));

    service
        .apply(&unsplash(UnsplashFrequency::Weekly))
        .await
        .unwrap();

    assert_eq!(service.state().get(), previous);
}

#[tokio::test(start_paused = true)]
async fn slow_resolve_does_not_overwrite_newer_settings() {
    let service = BackgroundService::with(Arc::new(SlowProvider), Arc::new(FixedConnectivity(true)));

    let stale = service.apply(&unsplash(UnsplashFrequency::Daily));
    service.apply(&Settings::default()).await.unwrap();
    assert_eq!(service.state().get(), BackgroundState::default());

    tokio::time::sleep(Duration::from_secs(3)).await;
    stale.await.unwrap();

    assert_eq!(service.state().get(), BackgroundState::default());
}

#[tokio::test(start_paused = true)]
async fn latest_of_overlapping_applies_wins() {
    let service = BackgroundService::with(Arc::new(SlowProvider), Arc::new(FixedConnectivity(true)));
    let custom = Settings {
        bg: BackgroundMode::Custom,
        bg_custom_url: "https://example.com/sea.png".to_string(),
        bg_opacity: 0,
        ..Settings::default()
    };

    let first = service.apply(&custom);
    let second = service.apply(&unsplash(UnsplashFrequency::Weekly));
    first.await.unwrap();
    assert_eq!(service.state().get(), BackgroundState::default());

    second.await.unwrap();
    let state = service.state().get();
    assert_eq!(state.image.as_deref(), Some("https://slow.example/img"));
    assert!((state.opacity - 0.4).abs() < f64::EPSILON);
}
