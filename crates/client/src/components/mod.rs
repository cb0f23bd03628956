pub mod city_search;
pub mod current_weather;
pub mod favorite_cities;
pub mod header;
pub mod hourly_temperature;
pub mod icons;
pub mod toaster;
pub mod ui;
pub mod weather_details;
pub mod weather_forecast;

pub use city_search::CitySearch;
pub use current_weather::CurrentWeather;
pub use favorite_cities::FavoriteCities;
pub use header::Header;
pub use hourly_temperature::HourlyTemperature;
pub use toaster::Toaster;
pub use weather_details::WeatherDetails;
pub use weather_forecast::WeatherForecast;
