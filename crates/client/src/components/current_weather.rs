//! Current conditions headline panel.

use dioxus::prelude::*;
use skycast_shared::{units, GeocodedPlace, WeatherSnapshot};

/// Big temperature readout with feels-like, daily min/max and the condition
/// icon. `location_name` is the reverse-geocoded place, when available;
/// otherwise the name reported by the weather API is shown.
#[component]
pub fn CurrentWeather(data: WeatherSnapshot, location_name: Option<GeocodedPlace>) -> Element {
    let condition = data.condition().cloned();
    let country = location_name
        .as_ref()
        .and_then(|p| p.country.clone())
        .or_else(|| data.sys.country.clone());

    rsx! {
        div { class: "overflow-hidden rounded-lg border bg-card p-6 shadow-sm",
            div { class: "grid gap-6 sm:grid-cols-2",
                div { class: "space-y-4",
                    div {
                        h2 { class: "text-2xl font-bold tracking-tight",
                            if let Some(place) = &location_name {
                                "{place.name}"
                                if let Some(state) = &place.state {
                                    span { class: "text-muted-foreground", ", {state}" }
                                }
                            } else {
                                "{data.name}"
                            }
                        }
                        if let Some(country) = &country {
                            p { class: "text-sm text-muted-foreground", "{country}" }
                        }
                    }
                    div { class: "flex items-end gap-2",
                        p { class: "text-7xl font-bold tracking-tighter",
                            {units::format_temp(data.main.temp)}
                        }
                        div { class: "space-y-1 pb-2 text-sm font-medium",
                            p { class: "text-muted-foreground",
                                "Feels like "
                                {units::format_temp(data.main.feels_like)}
                            }
                            div { class: "flex gap-2",
                                span { class: "text-blue-500",
                                    "↓ "
                                    {units::format_temp(data.main.temp_min)}
                                }
                                span { class: "text-red-500",
                                    "↑ "
                                    {units::format_temp(data.main.temp_max)}
                                }
                            }
                        }
                    }
                }
                if let Some(condition) = condition {
                    div { class: "flex flex-col items-center justify-center",
                        img {
                            class: "h-32 w-32 object-contain",
                            src: condition.icon_url(),
                            alt: condition.description.clone(),
                        }
                        p { class: "text-sm font-medium", {units::capitalize(&condition.description)} }
                    }
                }
            }
        }
    }
}
