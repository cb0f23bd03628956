//! HTTP client for the OpenWeatherMap data and geocoding APIs.

use serde::de::DeserializeOwned;
use skycast_shared::{ApiError, Coordinates, ForecastResponse, GeocodedPlace, WeatherSnapshot};

use crate::config;

const DATA_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0";

/// Client for the current-weather, forecast and geocoding endpoints.
#[derive(Debug, Clone)]
pub struct WeatherApi {
    client: reqwest::Client,
    api_key: String,
}

impl WeatherApi {
    /// Create a client using the configured API key.
    pub fn new() -> Self {
        Self::with_api_key(config::api_key())
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Current conditions at the given coordinates, metric units.
    pub async fn current_weather(&self, coords: Coordinates) -> Result<WeatherSnapshot, ApiError> {
        self.get_json(&self.weather_url(coords)).await
    }

    /// 5-day / 3-hour forecast at the given coordinates, metric units.
    pub async fn forecast(&self, coords: Coordinates) -> Result<ForecastResponse, ApiError> {
        self.get_json(&self.forecast_url(coords)).await
    }

    /// Resolve coordinates to a nearby place name.
    pub async fn reverse_geocode(
        &self,
        coords: Coordinates,
    ) -> Result<Vec<GeocodedPlace>, ApiError> {
        self.get_json(&self.reverse_geocode_url(coords)).await
    }

    /// Search cities by free-form name.
    pub async fn search_cities(&self, query: &str) -> Result<Vec<GeocodedPlace>, ApiError> {
        self.get_json(&self.search_url(query)).await
    }

    fn weather_url(&self, coords: Coordinates) -> String {
        format!(
            "{DATA_BASE_URL}/weather?lat={}&lon={}&units=metric&appid={}",
            coords.lat, coords.lon, self.api_key
        )
    }

    fn forecast_url(&self, coords: Coordinates) -> String {
        format!(
            "{DATA_BASE_URL}/forecast?lat={}&lon={}&units=metric&appid={}",
            coords.lat, coords.lon, self.api_key
        )
    }

    fn reverse_geocode_url(&self, coords: Coordinates) -> String {
        format!(
            "{GEO_BASE_URL}/reverse?lat={}&lon={}&limit=1&appid={}",
            coords.lat, coords.lon, self.api_key
        )
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{GEO_BASE_URL}/direct?q={}&limit=5&appid={}",
            urlencoding::encode(query),
            self.api_key
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }
}

impl Default for WeatherApi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: Coordinates = Coordinates {
        lat: 52.52,
        lon: 13.405,
    };

    fn api() -> WeatherApi {
        WeatherApi::with_api_key("test-key")
    }

    #[test]
    fn weather_url_carries_coordinates_units_and_key() {
        let expected = "https://api.openweathermap.org/data/2.5/weather\
                        ?lat=52.52&lon=13.405&units=metric&appid=test-key";
        assert_eq!(api().weather_url(BERLIN), expected);
    }

    #[test]
    fn forecast_url_uses_the_forecast_endpoint() {
        let url = api().forecast_url(BERLIN);
        assert!(url.starts_with("https://api.openweathermap.org/data/2.5/forecast?"));
        assert!(url.contains("lat=52.52"));
        assert!(url.contains("lon=13.405"));
        assert!(url.contains("units=metric"));
    }

    #[test]
    fn reverse_geocode_url_limits_to_one_result() {
        let url = api().reverse_geocode_url(BERLIN);
        assert!(url.starts_with("https://api.openweathermap.org/geo/1.0/reverse?"));
        assert!(url.contains("limit=1"));
    }

    #[test]
    fn search_url_percent_encodes_the_query() {
        let url = api().search_url("san josé");
        assert!(url.contains("q=san%20jos%C3%A9"), "got {url}");
        assert!(url.contains("limit=5"));
    }
}
