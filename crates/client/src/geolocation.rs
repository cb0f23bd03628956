//! Device location provider.
//!
//! `GeolocationProvider` owns the location signals and exposes them through
//! context; `use_geolocation()` reads them anywhere below the provider.
//! The web build asks the browser Geolocation API; native builds fall back to
//! a coarse IP-address lookup.

use dioxus::prelude::*;
use skycast_shared::Coordinates;

use crate::log_warn;

/// Location state shared with the rest of the app.
///
/// `coordinates` and `error` are never both set: a successful resolution
/// clears the error, a failed one clears the coordinates.
#[derive(Clone, Copy)]
pub struct GeolocationContext {
    pub coordinates: Signal<Option<Coordinates>>,
    pub error: Signal<Option<String>>,
    pub is_loading: Signal<bool>,
}

impl GeolocationContext {
    /// (Re)request the device location. Clears any previous error, flags the
    /// provider as loading, and resolves in the background.
    pub fn get_location(&self) {
        let mut coordinates = self.coordinates;
        let mut error = self.error;
        let mut is_loading = self.is_loading;

        is_loading.set(true);
        error.set(None);

        spawn(async move {
            match resolve_location().await {
                Ok(coords) => {
                    coordinates.set(Some(coords));
                    error.set(None);
                }
                Err(msg) => {
                    log_warn!("location request failed: {msg}");
                    coordinates.set(None);
                    error.set(Some(msg));
                }
            }
            is_loading.set(false);
        });
    }
}

/// Provider component that requests the location once on mount.
#[component]
pub fn GeolocationProvider(children: Element) -> Element {
    let coordinates = use_signal(|| None);
    let error = use_signal(|| None);
    let is_loading = use_signal(|| true);

    let ctx = use_context_provider(|| GeolocationContext {
        coordinates,
        error,
        is_loading,
    });

    use_effect(move || {
        ctx.get_location();
    });

    children
}

/// Access the location context provided by [`GeolocationProvider`].
pub fn use_geolocation() -> GeolocationContext {
    use_context::<GeolocationContext>()
}

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
async fn resolve_location() -> Result<Coordinates, String> {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| "Geolocation is not supported by your browser".to_string())?;

    let (tx, rx) = futures_channel::oneshot::channel::<Result<Coordinates, String>>();
    // Both callbacks need the sender; whichever fires first takes it.
    let tx = Rc::new(RefCell::new(Some(tx)));

    let tx_ok = tx.clone();
    let on_success = Closure::<dyn FnMut(web_sys::Position)>::new(move |pos: web_sys::Position| {
        let coords = pos.coords();
        if let Some(tx) = tx_ok.borrow_mut().take() {
            let _ = tx.send(Ok(Coordinates {
                lat: coords.latitude(),
                lon: coords.longitude(),
            }));
        }
    });

    let tx_err = tx.clone();
    let on_error =
        Closure::<dyn FnMut(web_sys::PositionError)>::new(move |err: web_sys::PositionError| {
            if let Some(tx) = tx_err.borrow_mut().take() {
                let _ = tx.send(Err(err.message()));
            }
        });

    geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .map_err(|_| "Failed to request location".to_string())?;

    // The browser owns the callbacks from here on.
    on_success.forget();
    on_error.forget();

    rx.await
        .unwrap_or_else(|_| Err("Location request was cancelled".to_string()))
}

// =========================================
// Native implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
async fn resolve_location() -> Result<Coordinates, String> {
    #[derive(serde::Deserialize)]
    struct IpLookup {
        status: String,
        #[serde(default)]
        lat: f64,
        #[serde(default)]
        lon: f64,
    }

    let resp = reqwest::get("http://ip-api.com/json/?fields=status,lat,lon")
        .await
        .map_err(|e| format!("Location lookup failed: {e}"))?;
    let body: IpLookup = resp
        .json()
        .await
        .map_err(|e| format!("Location lookup failed: {e}"))?;

    if body.status != "success" {
        return Err("Could not determine a location for this network address".to_string());
    }
    Ok(Coordinates {
        lat: body.lat,
        lon: body.lon,
    })
}
