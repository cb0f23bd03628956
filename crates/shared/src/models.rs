//! Shared data models: OpenWeatherMap response shapes and the favorites list.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair identifying a location for weather lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

// --- Current weather ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherCondition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl WeatherCondition {
    /// URL of the openweathermap.org icon asset for this condition.
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MainConditions {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
    #[serde(default)]
    pub temp_min: f64,
    #[serde(default)]
    pub temp_max: f64,
    #[serde(default)]
    pub pressure: f64,
    #[serde(default)]
    pub humidity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SysInfo {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sunrise: i64,
    #[serde(default)]
    pub sunset: i64,
}

/// Current-conditions response for one coordinate pair.
///
/// Owned by the query layer; the UI only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub coord: Coordinates,
    pub weather: Vec<WeatherCondition>,
    pub main: MainConditions,
    #[serde(default)]
    pub wind: Wind,
    #[serde(default)]
    pub sys: SysInfo,
    /// Shift in seconds from UTC at the observed location.
    #[serde(default)]
    pub timezone: i64,
    #[serde(default)]
    pub name: String,
    pub dt: i64,
}

impl WeatherSnapshot {
    /// Primary condition row, if the API returned one.
    pub fn condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }

    pub fn country_code(&self) -> &str {
        self.sys.country.as_deref().unwrap_or("")
    }
}

// --- Forecast ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: MainConditions,
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub wind: Wind,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastCity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub timezone: i64,
    #[serde(default)]
    pub sunrise: i64,
    #[serde(default)]
    pub sunset: i64,
}

/// 5-day / 3-hour forecast series, ordered by timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: ForecastCity,
}

// --- Geocoding ---

/// One row of a reverse or direct geocoding lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodedPlace {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

// --- Favorites ---

/// A user-saved location tracked independently of the current-location view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteCity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl FavoriteCity {
    pub fn new(name: impl Into<String>, country: Option<String>, coords: Coordinates) -> Self {
        Self {
            id: Self::id_for(coords),
            name: name.into(),
            country,
            lat: coords.lat,
            lon: coords.lon,
        }
    }

    /// Favorite ids derive from the coordinates, so the same place can only
    /// be saved once.
    pub fn id_for(coords: Coordinates) -> String {
        format!("{}-{}", coords.lat, coords.lon)
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Ordered collection of saved cities. Insertion order is display order and
/// ids are unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FavoritesList {
    cities: Vec<FavoriteCity>,
}

impl FavoritesList {
    pub fn cities(&self) -> &[FavoriteCity] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cities.iter().any(|c| c.id == id)
    }

    /// Appends the city unless one with the same id is already saved.
    /// Returns whether the list changed.
    pub fn add(&mut self, city: FavoriteCity) -> bool {
        if self.contains(&city.id) {
            return false;
        }
        self.cities.push(city);
        true
    }

    /// Removes a city by id, returning the removed entry.
    pub fn remove(&mut self, id: &str) -> Option<FavoriteCity> {
        let idx = self.cities.iter().position(|c| c.id == id)?;
        Some(self.cities.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, lat: f64, lon: f64) -> FavoriteCity {
        FavoriteCity::new(name, None, Coordinates { lat, lon })
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut list = FavoritesList::default();
        assert!(list.add(city("Berlin", 52.52, 13.405)));
        assert!(list.add(city("Kyiv", 50.45, 30.52)));
        assert!(list.add(city("Lisbon", 38.72, -9.14)));

        let names: Vec<_> = list.cities().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Berlin", "Kyiv", "Lisbon"]);
    }

    #[test]
    fn add_dedupes_by_id() {
        let mut list = FavoritesList::default();
        assert!(list.add(city("Berlin", 52.52, 13.405)));
        // Same coordinates means the same derived id, even with another name.
        assert!(!list.add(city("Berlin Mitte", 52.52, 13.405)));
        assert_eq!(list.cities().len(), 1);
        assert_eq!(list.cities()[0].name, "Berlin");
    }

    #[test]
    fn remove_returns_removed_entry() {
        let mut list = FavoritesList::default();
        list.add(city("Berlin", 52.52, 13.405));
        list.add(city("Kyiv", 50.45, 30.52));

        let id = FavoriteCity::id_for(Coordinates {
            lat: 52.52,
            lon: 13.405,
        });
        let removed = list.remove(&id).unwrap();
        assert_eq!(removed.name, "Berlin");
        assert_eq!(list.cities().len(), 1);
        assert!(list.remove(&id).is_none());
    }

    #[test]
    fn deserializes_current_weather_response() {
        let body = r#"{
            "coord": {"lon": 13.405, "lat": 52.52},
            "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
            "main": {"temp": 18.3, "feels_like": 17.9, "temp_min": 16.7, "temp_max": 19.8, "pressure": 1014, "humidity": 62},
            "wind": {"speed": 4.1, "deg": 250},
            "sys": {"country": "DE", "sunrise": 1727238000, "sunset": 1727281200},
            "timezone": 7200,
            "name": "Berlin",
            "dt": 1727260000
        }"#;

        let snapshot: WeatherSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.name, "Berlin");
        assert_eq!(snapshot.country_code(), "DE");
        assert_eq!(snapshot.condition().unwrap().icon, "04d");
        assert_eq!(
            snapshot.condition().unwrap().icon_url(),
            "https://openweathermap.org/img/wn/04d@2x.png"
        );
        assert_eq!(snapshot.main.temp, 18.3);
    }

    #[test]
    fn deserializes_forecast_response_without_optional_fields() {
        // The free-tier forecast endpoint omits wind on some rows.
        let body = r#"{
            "list": [
                {"dt": 1727260000, "main": {"temp": 18.3}, "weather": []},
                {"dt": 1727270800, "main": {"temp": 16.1}, "weather": [], "wind": {"speed": 2.0}}
            ],
            "city": {"name": "Berlin", "country": "DE", "timezone": 7200}
        }"#;

        let forecast: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(forecast.list.len(), 2);
        assert_eq!(forecast.list[0].wind, Wind::default());
        assert_eq!(forecast.city.timezone, 7200);
    }
}
