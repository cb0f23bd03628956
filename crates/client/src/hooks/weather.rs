//! Typed weather queries built on [`use_query`].

use dioxus::prelude::*;
use skycast_shared::{Coordinates, ForecastResponse, GeocodedPlace, WeatherSnapshot};

use super::query::{use_query, Query};
use crate::api_client::WeatherApi;

/// Current weather keyed on the live location signal. Yields no data until
/// coordinates are known and re-runs whenever they change.
pub fn use_weather_query(coordinates: Signal<Option<Coordinates>>) -> Query<WeatherSnapshot> {
    use_query(move || {
        let coords = coordinates();
        async move {
            match coords {
                Some(coords) => WeatherApi::new().current_weather(coords).await.map(Some),
                None => Ok(None),
            }
        }
    })
}

/// Forecast series keyed on the live location signal.
pub fn use_forecast_query(coordinates: Signal<Option<Coordinates>>) -> Query<ForecastResponse> {
    use_query(move || {
        let coords = coordinates();
        async move {
            match coords {
                Some(coords) => WeatherApi::new().forecast(coords).await.map(Some),
                None => Ok(None),
            }
        }
    })
}

/// Reverse-geocoded place names for the live location signal.
pub fn use_reverse_geocode_query(
    coordinates: Signal<Option<Coordinates>>,
) -> Query<Vec<GeocodedPlace>> {
    use_query(move || {
        let coords = coordinates();
        async move {
            match coords {
                Some(coords) => WeatherApi::new().reverse_geocode(coords).await.map(Some),
                None => Ok(None),
            }
        }
    })
}

/// Current weather for a fixed coordinate pair (favorite cards, city view).
pub fn use_city_weather_query(coords: Coordinates) -> Query<WeatherSnapshot> {
    use_query(move || async move { WeatherApi::new().current_weather(coords).await.map(Some) })
}

/// Forecast series for a fixed coordinate pair (city view).
pub fn use_city_forecast_query(coords: Coordinates) -> Query<ForecastResponse> {
    use_query(move || async move { WeatherApi::new().forecast(coords).await.map(Some) })
}
