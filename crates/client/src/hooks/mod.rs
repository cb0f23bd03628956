//! Data-fetching hooks.

pub mod query;
pub mod weather;

pub use query::{use_query, Query};
pub use weather::{
    use_city_forecast_query, use_city_weather_query, use_forecast_query,
    use_reverse_geocode_query, use_weather_query,
};
