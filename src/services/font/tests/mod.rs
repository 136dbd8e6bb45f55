#![allow(clippy::panic)]

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{
    config::{FontMode, Settings},
    services::{
        connectivity::FixedConnectivity,
        font::{FontError, FontLoader, FontService, FontState, GoogleFontsLoader, WebFont},
    },
};

/// Takes two seconds to load "Slow Serif", other families load at once.
struct SlowLoader;

#[async_trait]
impl FontLoader for SlowLoader {
    async fn load(&self, family: &str) -> Result<WebFont, FontError> {
        if family == "Slow Serif" {
            tokio::time::sleep(Duration::from_secs(2)).await;
        }
        Ok(WebFont {
            family: family.to_string(),
            stylesheet: format!("https://fonts.test/{family}"),
        })
    }
}

fn slow_service() -> FontService {
    FontService::with(Arc::new(SlowLoader), Arc::new(FixedConnectivity(true)))
}

fn web_font(family: &str) -> Settings {
    Settings {
        font: FontMode::Web,
        font_web: family.to_string(),
        ..Settings::default()
    }
}

fn service(online: bool) -> FontService {
    FontService::with(Arc::new(GoogleFontsLoader), Arc::new(FixedConnectivity(online)))
}

#[test]
fn google_fonts_stylesheet_urls() {
    assert_eq!(
        GoogleFontsLoader::stylesheet_url("Open Sans").as_deref(),
        Some("https://fonts.googleapis.com/css?family=Open+Sans")
    );
    assert_eq!(
        GoogleFontsLoader::stylesheet_url(" Roboto-Mono ").as_deref(),
        Some("https://fonts.googleapis.com/css?family=Roboto-Mono")
    );
    assert_eq!(GoogleFontsLoader::stylesheet_url(""), None);
    assert_eq!(GoogleFontsLoader::stylesheet_url("Lato;}</style>"), None);
}

#[tokio::test]
async fn loads_web_font() {
    let service = service(true);
    service.apply(&web_font("Open Sans")).await.unwrap();

    let state = service.state().get();
    let FontState::Web(font) = &state else {
        panic!("expected a web font, got {state:?}");
    };
    assert_eq!(font.family, "Open Sans");
    assert_eq!(
        state.css_rule().as_deref(),
        Some("* { font-family: 'Open Sans' !important; }")
    );
}

#[tokio::test]
async fn failures_fall_back_to_default() {
    let service = service(true);
    service.apply(&web_font("Open Sans")).await.unwrap();

    assert_eq!(
        service.resolve(&web_font("")).await,
        Err(FontError::InvalidFamily {
            family: String::new()
        })
    );
    service.apply(&web_font("")).await.unwrap();
    assert_eq!(service.state().get(), FontState::Default);
    assert_eq!(service.state().get().css_rule(), None);
}

#[tokio::test]
async fn offline_uses_default_font() {
    let service = service(false);

    assert_eq!(
        service.resolve(&web_font("Lato")).await,
        Err(FontError::NetworkUnavailable)
    );
    service.apply(&web_font("Lato")).await.unwrap();
    assert_eq!(service.state().get(), FontState::Default);

    assert_eq!(
        service.resolve(&Settings::default()).await,
        Ok(FontState::Default)
    );
}

#[tokio::test(start_paused = true)]
async fn slow_load_does_not_replace_default_font() {
    let service = slow_service();

    let stale = service.apply(&web_font("Slow Serif"));
    service.apply(&Settings::default()).await.unwrap();

    tokio::time::sleep(Duration::from_secs(3)).await;
    stale.await.unwrap();

    assert_eq!(service.state().get(), FontState::Default);
}

#[tokio::test(start_paused = true)]
async fn slow_load_does_not_replace_newer_family() {
    let service = slow_service();

    let stale = service.apply(&web_font("Slow Serif"));
    service.apply(&web_font("Lato")).await.unwrap();
    stale.await.unwrap();

    let state = service.state().get();
    let FontState::Web(font) = &state else {
        panic!("expected a web font, got {state:?}");
    };
    assert_eq!(font.family, "Lato");
}
