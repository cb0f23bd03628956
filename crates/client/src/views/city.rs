//! Detail page for a searched or saved city.

use dioxus::prelude::*;
use skycast_shared::{Coordinates, FavoriteCity};

use crate::components::icons::StarIcon;
use crate::components::ui::{Alert, AlertVariant, Button, ButtonVariant, WeatherSkeleton};
use crate::components::{CurrentWeather, HourlyTemperature, WeatherDetails, WeatherForecast};
use crate::hooks::{use_city_forecast_query, use_city_weather_query};
use crate::stores;

#[component]
pub fn CityView(name: String, lat: f64, lon: f64) -> Element {
    let coords = Coordinates { lat, lon };
    let weather = use_city_weather_query(coords);
    let forecast = use_city_forecast_query(coords);

    let favorite_id = FavoriteCity::id_for(coords);
    let saved = stores::is_favorite(&favorite_id);

    let toggle_name = name.clone();
    let handle_toggle = move |_| {
        if stores::is_favorite(&favorite_id) {
            if let Some(removed) = stores::remove_favorite(&favorite_id) {
                stores::notify_error(format!("Removed {} from Favorites", removed.name));
            }
        } else if stores::add_favorite(FavoriteCity::new(toggle_name.clone(), None, coords)) {
            stores::notify_success(format!("Added {toggle_name} to Favorites"));
        }
    };

    let star_class = if saved {
        "h-4 w-4 fill-current text-yellow-500"
    } else {
        "h-4 w-4"
    };

    let body = if let Some(error) = weather.error().or_else(|| forecast.error()) {
        rsx! {
            Alert {
                variant: AlertVariant::Destructive,
                title: "Could not load weather",
                description: error.to_string(),
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        weather.refetch();
                        forecast.refetch();
                    },
                    "Retry"
                }
            }
        }
    } else if weather.is_loading() || forecast.is_loading() {
        rsx! {
            WeatherSkeleton {}
        }
    } else {
        let snapshot = weather.data();
        let series = forecast.data();
        rsx! {
            if let (Some(snapshot), Some(series)) = (snapshot, series) {
                CurrentWeather { data: snapshot.clone() }
                HourlyTemperature { data: series.clone() }
                div { class: "grid gap-6 lg:grid-cols-2",
                    WeatherDetails { data: snapshot }
                    WeatherForecast { data: series }
                }
            }
        }
    };

    rsx! {
        div { class: "flex items-center justify-between",
            h1 { class: "text-2xl font-bold tracking-tight", "{name}" }
            Button {
                variant: ButtonVariant::Outline,
                onclick: handle_toggle,
                StarIcon { class: star_class.to_string() }
                span { class: "ml-2",
                    if saved { "Saved" } else { "Save" }
                }
            }
        }

        {body}
    }
}
