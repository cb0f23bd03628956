//! Favorites strip shown at the top of the dashboard.

use dioxus::prelude::*;
use skycast_shared::{units, FavoriteCity};

use crate::components::icons::{LoaderIcon, XIcon};
use crate::components::ui::{Button, ButtonVariant, ScrollArea};
use crate::hooks::use_city_weather_query;
use crate::stores;
use crate::stores::FAVORITES;
use crate::Route;

/// Horizontal strip of saved cities. Hidden entirely, heading included,
/// while nothing is saved.
#[component]
pub fn FavoriteCities() -> Element {
    let favorites = FAVORITES.read().cities().to_vec();
    if favorites.is_empty() {
        return rsx! {};
    }

    rsx! {
        h1 { class: "text-xl font-bold tracking-tight", "Favorites" }
        ScrollArea {
            div { class: "flex gap-4",
                for city in favorites {
                    FavoriteCityCard { key: "{city.id}", city }
                }
            }
        }
    }
}

/// One favorite tile. Issues its own weather fetch, independent of the
/// dashboard's primary query. A failed fetch renders nothing beyond the
/// shell; the strip stays quiet rather than stacking error panels.
#[component]
fn FavoriteCityCard(city: FavoriteCity) -> Element {
    let nav = use_navigator();
    let weather = use_city_weather_query(city.coordinates());

    let id = city.id.clone();
    let name = city.name.clone();
    let route = Route::CityView {
        name: city.name.clone(),
        lat: city.lat,
        lon: city.lon,
    };

    rsx! {
        div {
            class: "relative flex min-w-[250px] cursor-pointer items-center gap-3 rounded-lg border bg-card p-4 pr-8 shadow-sm transition-all hover:shadow-md",
            role: "button",
            tabindex: "0",
            onclick: move |_| {
                nav.push(route.clone());
            },
            Button {
                class: "absolute right-1 top-1 h-6 w-6 rounded-full p-0".to_string(),
                variant: ButtonVariant::Ghost,
                onclick: move |e: MouseEvent| {
                    // The card itself navigates; removal must not do both.
                    e.stop_propagation();
                    if let Some(removed) = stores::remove_favorite(&id) {
                        stores::notify_error(format!("Removed {} from Favorites", removed.name));
                    }
                },
                XIcon { class: "h-4 w-4".to_string() }
            }
            if weather.is_loading() {
                div { class: "flex h-8 flex-1 items-center justify-center",
                    LoaderIcon { class: "h-4 w-4 animate-spin".to_string() }
                }
            } else if let Some(weather) = weather.data() {
                div { class: "flex items-center gap-2",
                    if let Some(condition) = weather.condition() {
                        img {
                            class: "h-8 w-8",
                            src: condition.icon_url(),
                            alt: condition.description.clone(),
                        }
                    }
                    div {
                        p { class: "font-medium", "{name}" }
                        p { class: "text-xs text-muted-foreground",
                            {weather.country_code().to_string()}
                        }
                    }
                }
                div { class: "ml-auto text-right",
                    p { class: "text-xl font-bold", {units::format_temp(weather.main.temp)} }
                    if let Some(condition) = weather.condition() {
                        p { class: "text-xs capitalize text-muted-foreground",
                            "{condition.description}"
                        }
                    }
                }
            }
        }
    }
}
