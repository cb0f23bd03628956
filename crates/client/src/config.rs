//! Client configuration.
//!
//! The only tunable is the OpenWeatherMap API key: a key saved through the
//! storage module wins, then a compile-time `OPENWEATHER_API_KEY` environment
//! variable, then a shared demo key suitable for casual use.

use crate::storage;

const API_KEY_STORAGE_KEY: &str = "skycast_api_key";

/// Key shipped for out-of-the-box use; heavily rate limited.
const DEMO_API_KEY: &str = "895284fb2d2c50a520ea537456963d9c";

/// Resolve the OpenWeatherMap API key for this session.
pub fn api_key() -> String {
    if let Some(key) = storage::load::<String>(API_KEY_STORAGE_KEY) {
        if !key.trim().is_empty() {
            return key;
        }
    }
    match option_env!("OPENWEATHER_API_KEY") {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => DEMO_API_KEY.to_string(),
    }
}
