//! Skycast - Main entry point
//!
//! A Dioxus weather dashboard. Runs in the browser as WASM; the native
//! build exists for tests and headless development.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use skycast_client::routes::Route;
use skycast_client::stores::{apply_document_theme, THEME};
use skycast_client::GeolocationProvider;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Initialize tracing for native builds
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("skycast_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Re-apply the persisted theme whenever it changes, including the
    // initial value loaded from storage.
    use_effect(|| apply_document_theme(THEME()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        GeolocationProvider {
            Router::<Route> {}
        }
    }
}
