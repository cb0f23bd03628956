//! Cross-platform persistent storage for favorites, theme and settings.
//!
//! Values are serialized to JSON and stored under a string key:
//! - Web: `localStorage`
//! - Native: one file per key in the platform config directory
//!   (e.g. `~/.config/skycast/` on Linux)

use serde::{de::DeserializeOwned, Serialize};

/// Save a value under `key`. Returns `true` on success.
pub fn save<T: Serialize>(key: &str, value: &T) -> bool {
    match serde_json::to_string(value) {
        Ok(json) => save_raw(key, &json),
        Err(_) => false,
    }
}

/// Load the value stored under `key`, or `None` if it is missing or does not
/// deserialize as `T`.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    serde_json::from_str(&load_raw(key)?).ok()
}

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn save_raw(key: &str, value: &str) -> bool {
    match local_storage() {
        Some(storage) => storage.set_item(key, value).is_ok(),
        None => false,
    }
}

#[cfg(target_arch = "wasm32")]
fn load_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

// =========================================
// Native implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
fn file_path(key: &str) -> Option<std::path::PathBuf> {
    let app_dir = dirs::config_dir()?.join("skycast");
    if !app_dir.exists() {
        std::fs::create_dir_all(&app_dir).ok()?;
    }
    // Keys double as filenames, so strip anything path-like.
    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Some(app_dir.join(format!("{safe_key}.json")))
}

#[cfg(not(target_arch = "wasm32"))]
fn save_raw(key: &str, value: &str) -> bool {
    match file_path(key) {
        Some(path) => std::fs::write(path, value).is_ok(),
        None => false,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_raw(key: &str) -> Option<String> {
    std::fs::read_to_string(file_path(key)?).ok()
}
