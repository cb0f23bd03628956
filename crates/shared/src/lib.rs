//! Shared models and helpers for the skycast weather client.

pub mod error;
pub mod forecast;
pub mod models;
pub mod units;

pub use error::ApiError;
pub use forecast::{daily_forecast, DailyForecast};
pub use models::{
    Coordinates, FavoriteCity, FavoritesList, ForecastCity, ForecastEntry, ForecastResponse,
    GeocodedPlace, MainConditions, SysInfo, WeatherCondition, WeatherSnapshot, Wind,
};
