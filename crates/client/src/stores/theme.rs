//! Theme store: a light/dark flag persisted across sessions.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::storage;

const STORAGE_KEY: &str = "skycast_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Current theme, loaded from storage on first access.
pub static THEME: GlobalSignal<Theme> =
    Signal::global(|| storage::load(STORAGE_KEY).unwrap_or(Theme::Light));

/// Switch the theme, persist the choice, and retag the document.
pub fn set_theme(next: Theme) {
    *THEME.write() = next;
    storage::save(STORAGE_KEY, &next);
    apply_document_theme(next);
}

/// Set the `data-theme` attribute the stylesheet keys off. Applied once at
/// startup and again on every switch; a no-op outside the browser.
pub fn apply_document_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn toggling_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn themes_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").unwrap(),
            Theme::Light
        );
    }
}
