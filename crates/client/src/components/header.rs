//! Top navigation bar: logo, city search and the theme toggle.

use dioxus::prelude::*;

use crate::components::city_search::CitySearch;
use crate::components::icons::{MoonIcon, SunIcon};
use crate::components::ui::{Button, ButtonVariant};
use crate::stores::{set_theme, Theme, THEME};
use crate::Route;

const LOGO_LIGHT: Asset = asset!("/assets/logo-light.svg");
const LOGO_DARK: Asset = asset!("/assets/logo-dark.svg");

/// Rotation class on the theme toggle; flipping the theme spins the button.
fn toggle_rotation(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "rotate-180"
    } else {
        "rotate-0"
    }
}

#[component]
pub fn Header() -> Element {
    let theme = THEME();
    let logo = if theme.is_dark() { LOGO_DARK } else { LOGO_LIGHT };
    let rotation = toggle_rotation(theme);

    rsx! {
        header { class: "sticky top-0 z-10 border-b bg-background/95 backdrop-blur",
            div { class: "mx-auto flex h-14 max-w-5xl items-center justify-between gap-4 px-4",
                Link { to: Route::Dashboard {},
                    img { class: "h-8", src: logo, alt: "Skycast" }
                }
                CitySearch {}
                Button {
                    class: format!("h-9 w-9 rounded-full p-0 transition-transform {rotation}"),
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| set_theme(THEME().toggled()),
                    if theme.is_dark() {
                        SunIcon { class: "h-5 w-5".to_string() }
                    } else {
                        MoonIcon { class: "h-5 w-5".to_string() }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_rotation_tracks_the_theme() {
        assert_eq!(toggle_rotation(Theme::Dark), "rotate-180");
        assert_eq!(toggle_rotation(Theme::Light), "rotate-0");
    }
}
