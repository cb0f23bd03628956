//! City name search with a results dropdown.

use dioxus::prelude::*;

use skycast_shared::GeocodedPlace;

use crate::api_client::WeatherApi;
use crate::components::icons::SearchIcon;
use crate::hooks::use_query;
use crate::stores;
use crate::Route;

const MIN_QUERY_LEN: usize = 2;

/// "State, Country" qualifier for a search result, using whichever parts the
/// geocoder returned. Empty when it returned neither.
fn region_label(place: &GeocodedPlace) -> String {
    match (place.state.as_deref(), place.country.as_deref()) {
        (Some(state), Some(country)) => format!("{state}, {country}"),
        (Some(state), None) => state.to_string(),
        (None, Some(country)) => country.to_string(),
        (None, None) => String::new(),
    }
}

/// Free-text search over the geocoding API. Typing updates a signal the
/// query is keyed on, so results refresh as the term changes; picking a
/// result navigates to that city's detail view and clears the box.
#[component]
pub fn CitySearch() -> Element {
    let nav = use_navigator();
    let mut term = use_signal(String::new);
    let mut open = use_signal(|| false);

    let results = use_query(move || {
        let query = term();
        async move {
            if query.trim().len() < MIN_QUERY_LEN {
                return Ok(None);
            }
            let api = WeatherApi::new();
            api.search_cities(query.trim()).await.map(Some)
        }
    });

    use_effect(move || {
        if let Some(err) = results.error() {
            stores::notify_error(format!("City search failed: {err}"));
        }
    });

    let places = results.data().unwrap_or_default();

    rsx! {
        div { class: "relative w-full max-w-xs",
            div { class: "relative",
                SearchIcon {
                    class: "absolute left-2.5 top-1/2 h-4 w-4 -translate-y-1/2 text-muted-foreground"
                        .to_string(),
                }
                input {
                    class: "w-full rounded-md border bg-background py-2 pl-9 pr-3 text-sm outline-none focus:ring-2 focus:ring-primary",
                    r#type: "text",
                    placeholder: "Search city...",
                    value: "{term}",
                    oninput: move |e: FormEvent| {
                        term.set(e.value());
                        open.set(true);
                    },
                }
            }
            if open() && !places.is_empty() {
                div { class: "absolute z-20 mt-1 w-full overflow-hidden rounded-md border bg-card shadow-md",
                    for (place, route, region) in places.into_iter().map(|p| {
                        let route = Route::CityView {
                            name: p.name.clone(),
                            lat: p.lat,
                            lon: p.lon,
                        };
                        let region = region_label(&p);
                        (p, route, region)
                    }) {
                        button {
                            key: "{place.lat}-{place.lon}",
                            class: "flex w-full items-center justify-between px-3 py-2 text-left text-sm hover:bg-accent",
                            onclick: move |_| {
                                open.set(false);
                                term.set(String::new());
                                nav.push(route.clone());
                            },
                            span { "{place.name}" }
                            if !region.is_empty() {
                                span { class: "text-xs text-muted-foreground", "{region}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(state: Option<&str>, country: Option<&str>) -> GeocodedPlace {
        GeocodedPlace {
            name: "Springfield".to_string(),
            lat: 39.8,
            lon: -89.6,
            country: country.map(str::to_string),
            state: state.map(str::to_string),
        }
    }

    #[test]
    fn region_label_joins_state_and_country() {
        assert_eq!(region_label(&place(Some("Illinois"), Some("US"))), "Illinois, US");
    }

    #[test]
    fn region_label_uses_whichever_part_exists() {
        assert_eq!(region_label(&place(None, Some("US"))), "US");
        assert_eq!(region_label(&place(Some("Illinois"), None)), "Illinois");
    }

    #[test]
    fn region_label_is_empty_when_the_geocoder_gave_neither() {
        assert_eq!(region_label(&place(None, None)), "");
    }
}
