//! Main dashboard: current-location weather plus the favorites strip.

use dioxus::prelude::*;

use crate::components::icons::{MapPinIcon, RefreshIcon};
use crate::components::ui::{Alert, AlertVariant, Button, ButtonVariant, WeatherSkeleton};
use crate::components::{
    CurrentWeather, FavoriteCities, HourlyTemperature, WeatherDetails, WeatherForecast,
};
use crate::geolocation::use_geolocation;
use crate::hooks::{use_forecast_query, use_reverse_geocode_query, use_weather_query};
use crate::log_warn;

/// What the main panel shows. Exactly one phase applies at a time; earlier
/// variants win over later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardPhase {
    LocationLoading,
    LocationError,
    LocationMissing,
    DataError,
    DataLoading,
    Ready,
}

impl DashboardPhase {
    /// The favorites strip and the heading/refresh row render only once the
    /// page is fully ready; every other phase replaces the whole page.
    fn shows_location_summary(self) -> bool {
        self == DashboardPhase::Ready
    }
}

/// Collapses the location and query states into the single phase to render.
/// Location problems outrank data problems, and errors outrank spinners.
///
/// `data_missing` is "either query has no data yet", not "still running":
/// the queries settle with no data while coordinates are unknown, and the
/// page must keep showing the skeleton through the first real fetch.
fn dashboard_phase(
    location_loading: bool,
    location_error: bool,
    has_coordinates: bool,
    data_error: bool,
    data_missing: bool,
) -> DashboardPhase {
    if location_loading {
        DashboardPhase::LocationLoading
    } else if location_error {
        DashboardPhase::LocationError
    } else if !has_coordinates {
        DashboardPhase::LocationMissing
    } else if data_error {
        DashboardPhase::DataError
    } else if data_missing {
        DashboardPhase::DataLoading
    } else {
        DashboardPhase::Ready
    }
}

#[component]
pub fn Dashboard() -> Element {
    let geo = use_geolocation();
    let weather = use_weather_query(geo.coordinates);
    let forecast = use_forecast_query(geo.coordinates);
    let places = use_reverse_geocode_query(geo.coordinates);

    let location_error = geo.error.read().clone();
    let has_coordinates = geo.coordinates.read().is_some();

    let phase = dashboard_phase(
        (geo.is_loading)(),
        location_error.is_some(),
        has_coordinates,
        weather.error().is_some() || forecast.error().is_some(),
        weather.data().is_none() || forecast.data().is_none(),
    );

    let handle_refresh = move |_| {
        geo.get_location();
        if geo.coordinates.read().is_some() {
            weather.refetch();
            forecast.refetch();
            places.refetch();
        }
    };

    let refreshing = weather.is_fetching() || forecast.is_fetching();
    let refresh_icon_class = if weather.is_fetching() {
        "h-4 w-4 animate-spin"
    } else {
        "h-4 w-4"
    };

    let body = match phase {
        DashboardPhase::LocationLoading | DashboardPhase::DataLoading => rsx! {
            WeatherSkeleton {}
        },
        DashboardPhase::LocationError => rsx! {
            Alert {
                variant: AlertVariant::Destructive,
                title: "Location error",
                description: location_error.unwrap_or_default(),
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| geo.get_location(),
                    MapPinIcon { class: "mr-2 h-4 w-4".to_string() }
                    "Enable Location"
                }
            }
        },
        DashboardPhase::LocationMissing => rsx! {
            Alert {
                title: "Location Required",
                description: "Enable location services to see weather for where you are, or search for a city above.",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| geo.get_location(),
                    MapPinIcon { class: "mr-2 h-4 w-4".to_string() }
                    "Enable Location"
                }
            }
        },
        DashboardPhase::DataError => {
            if let Some(err) = weather.error().or_else(|| forecast.error()) {
                log_warn!("weather fetch failed: {err}");
            }
            rsx! {
                Alert {
                    variant: AlertVariant::Destructive,
                    title: "Error",
                    description: "Failed to fetch weather data. Please try again.",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_refresh,
                        "Retry"
                    }
                }
            }
        }
        DashboardPhase::Ready => {
            let snapshot = weather.data();
            let series = forecast.data();
            let place = places
                .data()
                .and_then(|mut p| if p.is_empty() { None } else { Some(p.remove(0)) });
            rsx! {
                if let (Some(snapshot), Some(series)) = (snapshot, series) {
                    CurrentWeather { data: snapshot.clone(), location_name: place }
                    HourlyTemperature { data: series.clone() }
                    div { class: "grid gap-6 lg:grid-cols-2",
                        WeatherDetails { data: snapshot }
                        WeatherForecast { data: series }
                    }
                }
            }
        }
    };

    if !phase.shows_location_summary() {
        return body;
    }

    rsx! {
        FavoriteCities {}

        div { class: "flex items-center justify-between",
            h1 { class: "text-2xl font-bold tracking-tight", "My Location" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: refreshing,
                onclick: handle_refresh,
                RefreshIcon { class: refresh_icon_class.to_string() }
                span { class: "ml-2", "Refresh" }
            }
        }

        {body}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_loading_wins_over_everything() {
        assert_eq!(
            dashboard_phase(true, true, true, true, true),
            DashboardPhase::LocationLoading
        );
    }

    #[test]
    fn location_error_wins_over_data_states() {
        assert_eq!(
            dashboard_phase(false, true, true, true, true),
            DashboardPhase::LocationError
        );
    }

    #[test]
    fn missing_coordinates_without_error_is_its_own_phase() {
        assert_eq!(
            dashboard_phase(false, false, false, false, true),
            DashboardPhase::LocationMissing
        );
    }

    #[test]
    fn data_error_outranks_missing_data() {
        assert_eq!(
            dashboard_phase(false, false, true, true, true),
            DashboardPhase::DataError
        );
    }

    #[test]
    fn missing_data_keeps_the_skeleton_even_with_settled_queries() {
        // Queries settle empty while coordinates are unknown; once they
        // arrive the first real fetch must still render as loading.
        assert_eq!(
            dashboard_phase(false, false, true, false, true),
            DashboardPhase::DataLoading
        );
    }

    #[test]
    fn all_clear_is_ready() {
        assert_eq!(
            dashboard_phase(false, false, true, false, false),
            DashboardPhase::Ready
        );
    }

    #[test]
    fn only_the_ready_phase_shows_the_location_summary() {
        let phases = [
            DashboardPhase::LocationLoading,
            DashboardPhase::LocationError,
            DashboardPhase::LocationMissing,
            DashboardPhase::DataError,
            DashboardPhase::DataLoading,
        ];
        for phase in phases {
            assert!(!phase.shows_location_summary(), "{phase:?}");
        }
        assert!(DashboardPhase::Ready.shows_location_summary());
    }
}
